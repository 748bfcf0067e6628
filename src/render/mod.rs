//! The page render pipeline.
//!
//! Every page on the site goes through the same fixed sequence: document
//! head with the title, the page's head-metadata hook, the shared nav
//! header, the page's body hook, the shared footer. [`render_page`] drives
//! that sequence; concrete pages (see [`crate::pages`]) only fill in the
//! hooks. A hook with nothing to contribute returns an empty fragment so
//! the pipeline shape stays uniform across pages.
//!
//! A failing hook aborts the render and propagates to the route handler;
//! no partial page is ever emitted.

pub mod layout;

use async_trait::async_trait;
use maud::Markup;

use crate::consent::ConsentState;
use crate::error::SiteError;
use crate::state::AppState;

/// Everything the hooks may consult while rendering one response.
pub struct RenderContext<'a> {
    pub state: &'a AppState,
    /// The visitor's cookie-consent choices, read before any third-party
    /// resource reference is emitted.
    pub consent: ConsentState,
    /// The session's form token, embedded in forms as a hidden field.
    pub form_token: String,
}

/// A page's extension points in the fixed pipeline.
///
/// Both hooks are required: a page that has nothing to add to a phase
/// returns an empty fragment rather than omitting the hook.
#[async_trait]
pub trait Page: Send + Sync {
    /// Title shown in the document head and the page header.
    fn title(&self) -> String;

    /// Head-metadata hook: page-specific `<link>`/`<meta>` tags. Anything
    /// referencing a third party must check `ctx.consent` first.
    fn metadata(&self, ctx: &RenderContext<'_>) -> Markup;

    /// Body hook: the page's main content. May read the settings store
    /// (through the resolver, which degrades to fallbacks on failure).
    async fn body(&self, ctx: &RenderContext<'_>) -> Result<Markup, SiteError>;
}

/// The assembled parts of one render, in pipeline order. Exposed separately
/// from the final markup so the phase sequence stays observable.
pub struct RenderedPage {
    pub title: String,
    pub metadata: Markup,
    pub body: Markup,
}

impl RenderedPage {
    /// Assemble the final document. Phase order is fixed: title, metadata,
    /// nav header, body, footer, each exactly once.
    pub fn into_markup(self, ctx: &RenderContext<'_>) -> Markup {
        layout::shell(
            &self.title,
            self.metadata,
            self.body,
            &ctx.state.config.site_name,
        )
    }
}

/// Run the hooks in pipeline order and collect their output.
pub async fn render_parts(
    page: &dyn Page,
    ctx: &RenderContext<'_>,
) -> Result<RenderedPage, SiteError> {
    let title = page.title();
    let metadata = page.metadata(ctx);
    let body = page.body(ctx).await?;
    Ok(RenderedPage {
        title,
        metadata,
        body,
    })
}

/// Render a complete HTML document for the given page.
pub async fn render_page(page: &dyn Page, ctx: &RenderContext<'_>) -> Result<Markup, SiteError> {
    let parts = render_parts(page, ctx).await?;
    Ok(parts.into_markup(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use maud::html;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::state::test_state;

    /// Probe page that marks each hook's output and counts invocations.
    struct ProbePage {
        metadata_calls: AtomicUsize,
        body_calls: AtomicUsize,
    }

    impl ProbePage {
        fn new() -> Self {
            Self {
                metadata_calls: AtomicUsize::new(0),
                body_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Page for ProbePage {
        fn title(&self) -> String {
            "TITLE-PROBE".to_string()
        }

        fn metadata(&self, _ctx: &RenderContext<'_>) -> Markup {
            self.metadata_calls.fetch_add(1, Ordering::SeqCst);
            html! { meta name="probe" content="METADATA-PROBE"; }
        }

        async fn body(&self, _ctx: &RenderContext<'_>) -> Result<Markup, SiteError> {
            self.body_calls.fetch_add(1, Ordering::SeqCst);
            Ok(html! { p { "BODY-PROBE" } })
        }
    }

    /// Probe page whose body hook fails.
    struct FailingPage;

    #[async_trait]
    impl Page for FailingPage {
        fn title(&self) -> String {
            "broken".to_string()
        }

        fn metadata(&self, _ctx: &RenderContext<'_>) -> Markup {
            html! {}
        }

        async fn body(&self, _ctx: &RenderContext<'_>) -> Result<Markup, SiteError> {
            Err(SiteError::Internal(anyhow::anyhow!("hook failure")))
        }
    }

    fn test_ctx(state: &AppState) -> RenderContext<'_> {
        RenderContext {
            state,
            consent: ConsentState::default(),
            form_token: "a".repeat(64),
        }
    }

    #[tokio::test]
    async fn sections_appear_in_pipeline_order() {
        let state = test_state();
        let ctx = test_ctx(&state);
        let page = ProbePage::new();

        let html = render_page(&page, &ctx).await.unwrap().into_string();

        let title = html.find("TITLE-PROBE").unwrap();
        let metadata = html.find("METADATA-PROBE").unwrap();
        let nav = html.find("<nav").unwrap();
        let body = html.find("BODY-PROBE").unwrap();
        let footer = html.find("<footer").unwrap();

        assert!(title < metadata, "title must precede metadata");
        assert!(metadata < nav, "metadata must precede the nav header");
        assert!(nav < body, "nav header must precede the body");
        assert!(body < footer, "body must precede the footer");
    }

    #[tokio::test]
    async fn each_hook_runs_exactly_once() {
        let state = test_state();
        let ctx = test_ctx(&state);
        let page = ProbePage::new();

        let html = render_page(&page, &ctx).await.unwrap().into_string();

        assert_eq!(page.metadata_calls.load(Ordering::SeqCst), 1);
        assert_eq!(page.body_calls.load(Ordering::SeqCst), 1);
        assert_eq!(html.matches("METADATA-PROBE").count(), 1);
        assert_eq!(html.matches("BODY-PROBE").count(), 1);
    }

    #[tokio::test]
    async fn hook_failure_propagates_without_partial_output() {
        let state = test_state();
        let ctx = test_ctx(&state);

        let result = render_page(&FailingPage, &ctx).await;
        assert!(matches!(result, Err(SiteError::Internal(_))));
    }

    #[tokio::test]
    async fn shell_carries_the_site_name() {
        let state = test_state();
        let ctx = test_ctx(&state);
        let html = render_page(&ProbePage::new(), &ctx).await.unwrap().into_string();
        assert!(html.contains("DS Allroundservices"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
