//! Holiday request form

use dioxus::prelude::*;

use crate::state::use_workflow;
use crate::types::HolidayRequestData;

#[component]
pub fn HolidayRequestForm() -> Element {
    let ctx = use_workflow();

    // Pre-fill from the active submission when it is a holiday request, so
    // returning to the form shows what was sent.
    let draft = ctx
        .workflow
        .read()
        .holiday_draft()
        .cloned()
        .unwrap_or_default();
    let HolidayRequestData {
        employee_name,
        department,
        start_date,
        end_date,
        reason,
    } = draft;

    let mut employee_name = use_signal(move || employee_name);
    let mut department = use_signal(move || department);
    let mut start_date = use_signal(move || start_date);
    let mut end_date = use_signal(move || end_date);
    let mut reason = use_signal(move || reason);

    let handle_submit = move |_| {
        ctx.submit_holiday(HolidayRequestData {
            employee_name: employee_name(),
            department: department(),
            start_date: start_date(),
            end_date: end_date(),
            reason: reason(),
        });
    };

    rsx! {
        form {
            class: "card form-card",
            onsubmit: handle_submit,

            header {
                class: "form-card__header",
                h2 { "Holiday Request Form" }
                p {
                    "Provide the details for your upcoming time off. Your request will be routed to your manager for review."
                }
            }

            div {
                class: "form-grid",

                label {
                    class: "form-field",
                    span { "Employee name" }
                    input {
                        required: true,
                        r#type: "text",
                        value: "{employee_name}",
                        oninput: move |e| employee_name.set(e.value()),
                        placeholder: "Jane Doe"
                    }
                }

                label {
                    class: "form-field",
                    span { "Department" }
                    input {
                        required: true,
                        r#type: "text",
                        value: "{department}",
                        oninput: move |e| department.set(e.value()),
                        placeholder: "Customer Success"
                    }
                }

                label {
                    class: "form-field",
                    span { "Start date" }
                    input {
                        required: true,
                        r#type: "date",
                        value: "{start_date}",
                        oninput: move |e| start_date.set(e.value())
                    }
                }

                label {
                    class: "form-field",
                    span { "End date" }
                    input {
                        required: true,
                        r#type: "date",
                        value: "{end_date}",
                        min: "{start_date}",
                        oninput: move |e| end_date.set(e.value())
                    }
                }

                label {
                    class: "form-field form-field--full",
                    span { "Reason / coverage notes" }
                    textarea {
                        required: true,
                        rows: "4",
                        value: "{reason}",
                        oninput: move |e| reason.set(e.value()),
                        placeholder: "Provide context for your time away."
                    }
                }
            }

            footer {
                class: "form-card__footer",
                button {
                    r#type: "submit",
                    class: "primary",
                    "Submit request"
                }
            }
        }
    }
}
