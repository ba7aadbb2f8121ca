use crate::account::Account;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AccountLabelProps {
    pub account: Account,
}

#[function_component]
pub fn AccountLabel(props: &AccountLabelProps) -> Html {
    html! {
        <div title={props.account.address.clone()}>
            <div>{props.account.display_name.clone()}</div>
        </div>
    }
}
