use crate::{error::WalletError, hooks::UseFreighterHandle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConnectButtonProps {
    pub label: AttrValue,
    /// Accepted for layout compatibility; not used when rendering.
    #[prop_or_default]
    pub is_higher: bool,
}

#[function_component]
pub fn ConnectButton(props: &ConnectButtonProps) -> Html {
    let freighter = use_context::<UseFreighterHandle>().expect(
        "no freighter provider found. you must wrap your components in a <FreighterProvider/>",
    );
    let failure = use_state(|| None::<WalletError>);

    let onclick = {
        let failure = failure.clone();
        Callback::from(move |_: MouseEvent| {
            let failure = failure.clone();
            let report = Callback::from(move |result: Result<(), WalletError>| {
                failure.set(result.err());
            });
            freighter.request_permission(report);
        })
    };

    html! {
        <>
            <button {onclick}>{props.label.clone()}</button>
            if let Some(failure) = &*failure {
                <p class="wallet-error">{failure.to_string()}</p>
            }
        </>
    }
}
