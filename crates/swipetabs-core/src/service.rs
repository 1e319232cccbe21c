use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use crate::clock::FrameClock;
use crate::config::AppConfig;
use crate::gesture::GesturePayload;
use crate::group::TabGroup;
use crate::projection::Translate;
use crate::state::{StateInput, TabState};
use crate::{Error, Result};

/// Cooperative event loop driving one tab group
///
/// Inputs, the shutdown signal and refresh ticks are merged into a single
/// ordered timeline. Inputs win over frames, so a fresher target is always
/// folded in before the next frame is sampled.
pub struct TabGroupService {
    group: TabGroup,
    clock: Box<dyn FrameClock>,
    inputs: mpsc::UnboundedReceiver<StateInput>,
    translate_tx: watch::Sender<Translate>,
    state_tx: watch::Sender<TabState>,
}

/// Cloneable front end used by input sources and renderers
#[derive(Clone)]
pub struct TabGroupHandle {
    input_tx: mpsc::UnboundedSender<StateInput>,
    translate_rx: watch::Receiver<Translate>,
    state_rx: watch::Receiver<TabState>,
}

impl TabGroupService {
    /// Create a service and its handle
    pub fn new(
        tab_count: usize,
        config: &AppConfig,
        clock: Box<dyn FrameClock>,
    ) -> (Self, TabGroupHandle) {
        let group = TabGroup::new(tab_count, config);
        let (input_tx, inputs) = mpsc::unbounded_channel();
        let (translate_tx, translate_rx) = watch::channel(group.translate());
        let (state_tx, state_rx) = watch::channel(*group.state());

        let service = Self {
            group,
            clock,
            inputs,
            translate_tx,
            state_tx,
        };
        let handle = TabGroupHandle {
            input_tx,
            translate_rx,
            state_rx,
        };

        (service, handle)
    }

    /// Run until shutdown is signalled or every handle is dropped
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let Self {
            mut group,
            mut clock,
            mut inputs,
            translate_tx,
            state_tx,
        } = self;

        info!(tab_count = group.state().tab_count, "Tab group service started");

        loop {
            tokio::select! {
                biased;

                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("Tab group service received shutdown signal");
                        break;
                    }
                }

                input = inputs.recv() => {
                    let Some(input) = input else {
                        debug!("All tab group handles dropped");
                        break;
                    };
                    let state = *group.dispatch(input, clock.now());
                    state_tx.send_replace(state);
                }

                now = clock.tick(), if group.needs_frame() => {
                    if let Some(translate) = group.tick(now) {
                        translate_tx.send_replace(translate);
                    }
                }
            }
        }

        info!("Tab group service stopped");
    }
}

impl TabGroupHandle {
    pub fn send(&self, input: StateInput) -> Result<()> {
        self.input_tx.send(input).map_err(|_| Error::ServiceStopped)
    }

    /// Report a width measurement
    pub fn set_tab_width(&self, width: f64) -> Result<()> {
        self.send(StateInput::TabWidth(width))
    }

    /// Navigate to a tab, e.g. from a header click
    pub fn request_index(&self, index: usize) -> Result<()> {
        self.send(StateInput::RequestedIndex(index))
    }

    /// Forward a gesture recognizer update
    pub fn pan(&self, payload: GesturePayload) -> Result<()> {
        self.send(payload.into())
    }

    /// Latest translate values
    pub fn translate(&self) -> Translate {
        *self.translate_rx.borrow()
    }

    /// Receiver notified on every emitted translate
    pub fn subscribe(&self) -> watch::Receiver<Translate> {
        self.translate_rx.clone()
    }

    /// Latest reducer state
    pub fn state(&self) -> TabState {
        *self.state_rx.borrow()
    }

    /// Receiver notified on every reducer transition
    pub fn subscribe_state(&self) -> watch::Receiver<TabState> {
        self.state_rx.clone()
    }
}
