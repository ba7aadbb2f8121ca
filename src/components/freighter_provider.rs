use crate::{
    config::WalletConfig,
    hooks::{use_freighter, UseFreighterHandle},
    wallet::WalletHandle,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FreighterProviderProps {
    pub children: Children,
    /// Wallet to talk to. Defaults to the Freighter extension.
    #[prop_or_default]
    pub wallet: Option<WalletHandle>,
    #[prop_or_default]
    pub config: WalletConfig,
}

#[function_component]
pub fn FreighterProvider(props: &FreighterProviderProps) -> Html {
    let wallet = use_memo(
        |wallet| wallet.clone().unwrap_or_else(WalletHandle::freighter),
        props.wallet.clone(),
    );
    let freighter = use_freighter((*wallet).clone(), props.config.clone());

    html! {
        <ContextProvider<UseFreighterHandle> context={freighter}>
            {props.children.clone()}
        </ContextProvider<UseFreighterHandle>>
    }
}
