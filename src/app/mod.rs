use crate::api::{HttpTransport, SubmissionTransport};
use crate::pages::LandingPage;
use crate::state::{PageContext, PageState};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn App() -> impl IntoView {
    let transport = HttpTransport::from_env();
    tracing::debug!(endpoint = %transport.endpoint(), "submission endpoint configured");

    view! { <Page transport=Rc::new(transport) /> }
}

/// The page with an explicit submission transport.
#[component]
pub fn Page(transport: Rc<dyn SubmissionTransport>) -> impl IntoView {
    provide_context(PageContext(PageState::new(transport)));

    view! { <LandingPage /> }
}
