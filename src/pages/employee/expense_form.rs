//! Expense claim form

use dioxus::prelude::*;

use crate::state::use_workflow;
use crate::types::{ExpenseCategory, ExpenseClaimData};

#[component]
pub fn ExpenseClaimForm() -> Element {
    let ctx = use_workflow();

    let draft = ctx
        .workflow
        .read()
        .expense_draft()
        .cloned()
        .unwrap_or_default();
    let ExpenseClaimData {
        claimant_name,
        expense_date,
        category,
        amount,
        notes,
    } = draft;

    let mut claimant_name = use_signal(move || claimant_name);
    let mut expense_date = use_signal(move || expense_date);
    let mut category = use_signal(move || category);
    let mut amount = use_signal(move || amount);
    let mut notes = use_signal(move || notes);

    let handle_submit = move |_| {
        ctx.submit_expense(ExpenseClaimData {
            claimant_name: claimant_name(),
            expense_date: expense_date(),
            category: category(),
            amount: amount(),
            notes: notes(),
        });
    };

    rsx! {
        form {
            class: "card form-card",
            onsubmit: handle_submit,

            header {
                class: "form-card__header",
                h2 { "Expense Claim Form" }
                p {
                    "Submit reimbursable expenses for manager approval and Finance processing."
                }
            }

            div {
                class: "form-grid",

                label {
                    class: "form-field",
                    span { "Claimant name" }
                    input {
                        required: true,
                        r#type: "text",
                        value: "{claimant_name}",
                        oninput: move |e| claimant_name.set(e.value()),
                        placeholder: "John Smith"
                    }
                }

                label {
                    class: "form-field",
                    span { "Expense date" }
                    input {
                        required: true,
                        r#type: "date",
                        value: "{expense_date}",
                        oninput: move |e| expense_date.set(e.value())
                    }
                }

                label {
                    class: "form-field",
                    span { "Category" }
                    select {
                        required: true,
                        value: "{category}",
                        oninput: move |e| category.set(e.value()),
                        option { value: "", "Choose a category" }
                        for cat in ExpenseCategory::variants().iter().copied() {
                            option { value: cat.value(), {cat.label()} }
                        }
                    }
                }

                label {
                    class: "form-field",
                    span { "Amount" }
                    input {
                        required: true,
                        min: "0",
                        step: "0.01",
                        r#type: "number",
                        value: "{amount}",
                        oninput: move |e| amount.set(e.value()),
                        placeholder: "0.00"
                    }
                }

                label {
                    class: "form-field form-field--full",
                    span { "Supporting details" }
                    textarea {
                        rows: "4",
                        value: "{notes}",
                        oninput: move |e| notes.set(e.value()),
                        placeholder: "Break down the expense and provide any extra context."
                    }
                }
            }

            footer {
                class: "form-card__footer",
                button {
                    r#type: "submit",
                    class: "primary",
                    "Submit claim"
                }
            }
        }
    }
}
