use crate::ui;
use anyhow::Result;
use colored::Colorize;
use std::future::Future;

/// Lifecycle of a page's data: one fetch per load, no retry.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> PageState<T> {
    /// Fetch the page's data behind a spinner.
    pub async fn load<F>(label: &str, fetch: F) -> Self
    where
        F: Future<Output = Result<T>>,
    {
        let mut page = PageState::Loading;
        let pb = match ui::spinner(label) {
            Ok(pb) => Some(pb),
            Err(e) => {
                log::debug!("no spinner: {e}");
                None
            }
        };
        page.settle(fetch.await);
        if let Some(pb) = pb {
            pb.finish_and_clear();
        }
        page
    }

    /// Move out of `Loading` into `Ready` or `Failed`. Pages that have already
    /// settled stay as they are.
    pub fn settle(&mut self, result: Result<T>) {
        if !matches!(self, PageState::Loading) {
            log::warn!("page already settled; ignoring late result");
            return;
        }
        *self = match result {
            Ok(data) => PageState::Ready(data),
            Err(e) => {
                log::error!("{e:#}");
                PageState::Failed(format!("{e:#}"))
            }
        };
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PageState<U> {
        match self {
            PageState::Loading => PageState::Loading,
            PageState::Ready(data) => PageState::Ready(f(data)),
            PageState::Failed(message) => PageState::Failed(message),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PageState::Failed(_))
    }

    pub fn render(&self, view: impl FnOnce(&T) -> String) -> String {
        match self {
            PageState::Loading => "Loading...".to_string(),
            PageState::Ready(data) => view(data),
            PageState::Failed(message) if message.is_empty() => {
                "No data available".red().to_string()
            }
            PageState::Failed(message) => message.red().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn loading_settles_once() {
        let mut page: PageState<u32> = PageState::Loading;
        page.settle(Ok(7));
        assert_eq!(page, PageState::Ready(7));

        page.settle(Err(anyhow!("too late")));
        assert_eq!(page, PageState::Ready(7));
    }

    #[test]
    fn failure_keeps_the_whole_chain() {
        let mut page: PageState<u32> = PageState::Loading;
        page.settle(Err(anyhow!("Failed to fetch market data (429 Too Many Requests)")
            .context("Failed to fetch crypto data")));
        assert!(page.is_failed());
        assert_eq!(
            page,
            PageState::Failed(
                "Failed to fetch crypto data: Failed to fetch market data (429 Too Many Requests)"
                    .to_string()
            )
        );
    }

    #[test]
    fn render_per_state() {
        colored::control::set_override(false);
        let view = |n: &u32| format!("{n} rows");
        assert_eq!(PageState::<u32>::Loading.render(view), "Loading...");
        assert_eq!(PageState::Ready(3).render(view), "3 rows");
        assert_eq!(PageState::<u32>::Failed("boom".into()).render(view), "boom");
        assert_eq!(PageState::<u32>::Failed(String::new()).render(view), "No data available");
    }

    #[actix_web::test]
    async fn load_resolves_to_a_terminal_state() {
        let ready = PageState::load("loading", async { Ok(vec![1, 2, 3]) }).await;
        assert_eq!(ready, PageState::Ready(vec![1, 2, 3]));

        let failed: PageState<Vec<u8>> = PageState::load("loading", async { Err(anyhow!("offline")) }).await;
        assert_eq!(failed, PageState::Failed("offline".to_string()));
    }
}
