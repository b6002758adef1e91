mod render;

use tokio::{sync::watch, task::JoinHandle};

use crate::about::AboutProfile;

pub use render::render;

#[derive(Debug, Clone)]
pub enum ViewState {
    Loading,
    Loaded(AboutProfile),
    Failed(String),
}

/// The about page component. Mounting fires the one and only fetch;
/// dropping the view aborts it, so a slow response can never land
/// after teardown.
pub struct AboutView {
    state: watch::Receiver<ViewState>,
    fetch_task: JoinHandle<()>,
}

impl AboutView {
    pub fn mount(base_url: &str) -> Self {
        let (tx, state) = watch::channel(ViewState::Loading);
        let url = format!("{base_url}/about");

        let fetch_task = tokio::spawn(async move {
            let next = match fetch_about(&url).await {
                Ok(profile) => ViewState::Loaded(profile),
                Err(err) => ViewState::Failed(format!("{err:#}")),
            };
            let _ = tx.send(next);
        });

        Self { state, fetch_task }
    }

    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Waits for the fetch to resolve or reject.
    pub async fn settled(&mut self) -> ViewState {
        if matches!(*self.state.borrow(), ViewState::Loading) {
            let _ = self.state.changed().await;
        }
        self.state.borrow().clone()
    }

    pub fn render(&self) -> String {
        render::render(&self.state.borrow())
    }
}

impl Drop for AboutView {
    fn drop(&mut self) {
        self.fetch_task.abort();
    }
}

async fn fetch_about(url: &str) -> anyhow::Result<AboutProfile> {
    let profile = reqwest::get(url)
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(profile)
}
