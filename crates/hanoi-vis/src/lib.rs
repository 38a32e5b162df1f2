//! Tower of Hanoi Visualization
//!
//! Browser front end for the correct and faulty solvers in `hanoi_core`.
//!
//! # Architecture
//!
//! - **Demonstration**: builds the timed cue list for one request
//! - **Playback**: fires cues on tokio timers and mirrors the towers
//! - **WebSocket**: streams frames to the page
//! - **REST API**: moves, transcripts, plans and tower layouts as JSON
//!
//! # Usage
//!
//! ```ignore
//! let config = VisConfig::from_env()?;
//! VisServer::new(config).serve().await?;
//! ```

mod config;
mod demonstration;
mod error;
mod events;
mod playback;
mod server;

pub use config::{VisConfig, ADDR_VAR, DEFAULT_DISKS_VAR};
pub use demonstration::{Cue, Demonstration, DiskInput, Step};
pub use error::{Result, VisError};
pub use events::VisEvent;
pub use playback::{new_stage, play, spawn, Stage};
pub use server::VisServer;

#[cfg(test)]
mod tests {
    use super::*;
    use hanoi_core::{DiskCount, Variant};

    #[test]
    fn faulty_run_never_moves_disks() {
        let demo = Demonstration::run(Variant::Faulty, DiskCount::new(3).unwrap());
        assert!(demo
            .cues()
            .iter()
            .all(|c| matches!(c.step, Step::Emit(_))));
    }

    #[test]
    fn visual_demo_ends_with_completion() {
        let n = DiskCount::new(4).unwrap();
        let demo = Demonstration::visual(n);
        match demo.cues().last().map(|c| &c.step) {
            Some(Step::Emit(VisEvent::Complete { total })) => {
                assert_eq!(*total, n.expected_moves())
            }
            other => panic!("unexpected last step {other:?}"),
        }
    }
}
