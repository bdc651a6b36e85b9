use std::sync::{mpsc, Arc};
use std::thread;

use chrono::Local;

use crate::clipper::Clipper;
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    Clip { request_id: RequestId, input: String },
}

/// Runs clip requests on a background tokio runtime.
///
/// Each request is an independent task; completions arrive as
/// [`EngineEvent`]s in whatever order they finish.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(clipper: Clipper) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let clipper = Arc::new(clipper);
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let clipper = clipper.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(clipper.as_ref(), command, event_tx).await;
                });
            }
            // Let in-flight requests finish once the handle is dropped.
            runtime.shutdown_timeout(std::time::Duration::from_secs(30));
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn enqueue(&self, request_id: RequestId, input: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Clip {
            request_id,
            input: input.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event. `None` once the engine thread is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}

async fn handle_command(clipper: &Clipper, command: EngineCommand, event_tx: mpsc::Sender<EngineEvent>) {
    match command {
        EngineCommand::Clip { request_id, input } => {
            let created_at = Local::now();
            let result = match clipper.dispatch(&input) {
                None => Ok(None),
                Some(source) => {
                    let _ = event_tx.send(EngineEvent::Started { request_id, source });
                    clipper.clip_as(source, &input, created_at).await.map(Some)
                }
            };
            let _ = event_tx.send(EngineEvent::Completed {
                request_id,
                input,
                result,
            });
        }
    }
}
