use yew::prelude::*;

/// `false` on the first render, `true` once the component has been
/// attached to the document. Never flips back.
#[hook]
pub fn use_is_mounted() -> bool {
    let mounted = use_state(|| false);
    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                mounted.set(true);
                || ()
            },
            (),
        );
    }
    *mounted
}
