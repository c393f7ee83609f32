use shared::format_balance;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AccountSummaryProps {
    pub balance: f64,
}

#[function_component(AccountSummary)]
pub fn account_summary(props: &AccountSummaryProps) -> Html {
    html! {
        <section class="card account-summary">
            <h2 class="card-title">{"Account Balance"}</h2>
            <p class="balance-amount">{format!("${}", format_balance(props.balance))}</p>
        </section>
    }
}
