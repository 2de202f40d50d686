use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub visible: bool,
    pub onclick: Callback<MouseEvent>,
}

/// Floating button that appears once the page has been scrolled past the
/// back-to-top threshold. Stays in the tree so the opacity transition can
/// play both ways.
#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    html! {
        <>
            <button
                class={classes!("back-to-top", props.visible.then_some("visible"))}
                onclick={props.onclick.clone()}
                aria-label="Back to top"
            >
                <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <path d="M12 19V5M5 12l7-7 7 7" />
                </svg>
            </button>
            <style>
                {r#"
                    .back-to-top {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        width: 44px;
                        height: 44px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border: none;
                        border-radius: 50%;
                        background: #f97316;
                        color: #fff;
                        box-shadow: 0 6px 16px rgba(249, 115, 22, 0.35);
                        cursor: pointer;
                        opacity: 0;
                        transform: translateY(8px);
                        pointer-events: none;
                        transition: opacity 0.3s ease, transform 0.3s ease, background 0.2s ease;
                        z-index: 90;
                    }

                    .back-to-top.visible {
                        opacity: 1;
                        transform: translateY(0);
                        pointer-events: auto;
                    }

                    .back-to-top:hover {
                        background: #ea580c;
                    }
                "#}
            </style>
        </>
    }
}
