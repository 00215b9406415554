//! Handle to a spawned aggregator

use super::driver::SliderCommand;
use crate::error::{Error, Result};
use crate::render::SliderView;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Controls a running [`Aggregator`](super::Aggregator) and observes its views
#[derive(Debug)]
pub struct SliderHandle {
    commands: mpsc::Sender<SliderCommand>,
    views: watch::Receiver<Option<SliderView>>,
    task: JoinHandle<()>,
}

impl SliderHandle {
    pub(super) fn new(
        commands: mpsc::Sender<SliderCommand>,
        views: watch::Receiver<Option<SliderView>>,
        task: JoinHandle<()>,
    ) -> Self {
        Self {
            commands,
            views,
            task,
        }
    }

    /// Latest published view (`None` while the slider hides itself)
    pub fn current(&self) -> Option<SliderView> {
        self.views.borrow().clone()
    }

    /// Subscribe to view changes
    pub fn subscribe(&self) -> watch::Receiver<Option<SliderView>> {
        self.views.clone()
    }

    /// Wait until the published view satisfies `predicate`
    pub async fn wait_for<F>(&mut self, mut predicate: F) -> Result<Option<SliderView>>
    where
        F: FnMut(&Option<SliderView>) -> bool,
    {
        let view = self
            .views
            .wait_for(|view| predicate(view))
            .await
            .map_err(|_| Error::SessionClosed)?;
        Ok(view.clone())
    }

    /// Switch the slider to another listing URL
    pub async fn set_url(&self, url: impl Into<String>) -> Result<()> {
        self.commands
            .send(SliderCommand::SetUrl(url.into()))
            .await
            .map_err(|_| Error::SessionClosed)
    }

    /// Stop the aggregator and wait for its task to finish
    pub async fn shutdown(self) -> Result<()> {
        // Already stopped if the receiver is gone
        let _ = self.commands.send(SliderCommand::Shutdown).await;
        self.task
            .await
            .map_err(|e| Error::TaskFailed(e.to_string()))
    }
}
