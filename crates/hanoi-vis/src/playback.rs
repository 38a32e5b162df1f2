//! Timer-driven playback of a demonstration.
//!
//! Playback is fire-and-forget: once spawned it runs to the end and cannot
//! be stopped. Two playbacks on the same stage interleave in timer order.

use std::sync::Arc;

use hanoi_core::TowerState;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, trace};

use crate::demonstration::{Cue, Demonstration, Step};
use crate::events::VisEvent;

/// Tower mirror shared by every playback on one connection.
pub type Stage = Arc<Mutex<TowerState>>;

/// Create a stage showing `n` disks on peg A.
pub fn new_stage(n: u8) -> Stage {
    Arc::new(Mutex::new(TowerState::new(n)))
}

/// Turn a cue into the frame the page receives.
///
/// A move whose disk is not on its source peg yields nothing.
async fn render(cue: Cue, stage: &Stage) -> Option<VisEvent> {
    match cue.step {
        Step::Emit(event) => Some(event),
        Step::ResetTower { disks } => {
            let mut tower = stage.lock().await;
            tower.reset(disks.get());
            Some(VisEvent::Reset {
                disks: disks.get(),
                placements: tower.layout(),
            })
        }
        Step::MoveDisk { index, mv } => {
            let placement = stage.lock().await.move_top_disk(mv.disk, mv.from, mv.to);
            match placement {
                Some(placement) => Some(VisEvent::Move {
                    index,
                    disk: mv.disk,
                    from: mv.from,
                    to: mv.to,
                    placement,
                }),
                None => {
                    debug!("Disk {} not found on peg {}, skipping", mv.disk, mv.from);
                    None
                }
            }
        }
    }
}

/// Fire each cue at its offset and forward the resulting frames.
///
/// Returns early if the receiver goes away.
pub async fn play(demo: Demonstration, stage: Stage, tx: mpsc::UnboundedSender<VisEvent>) {
    let start = Instant::now();
    for cue in demo {
        sleep_until(start + cue.at).await;
        let Some(event) = render(cue, &stage).await else {
            continue;
        };
        trace!("Sending {} frame", event.kind());
        if tx.send(event).is_err() {
            debug!("Playback receiver closed");
            return;
        }
    }
}

/// Start playback in the background.
pub fn spawn(
    demo: Demonstration,
    stage: Stage,
    tx: mpsc::UnboundedSender<VisEvent>,
) -> JoinHandle<()> {
    debug!(
        "Spawning playback of {} cues over {:?}",
        demo.len(),
        demo.duration()
    );
    tokio::spawn(play(demo, stage, tx))
}
