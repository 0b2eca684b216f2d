//! Main controller loop of ffm.
//!
//! Drives a [NavState] against a [DisplayAdapter]: reload when requested,
//! render, wait for one event, apply it, repeat until quit. Exactly one event
//! is processed to completion before the next one is read.

use crate::app::display::DisplayAdapter;
use crate::app::handlers::KeypressResult;
use crate::app::NavState;
use crate::core::BrowseError;

impl NavState {
    /// Runs the event loop until a quit event or the first error.
    pub fn run<D: DisplayAdapter + ?Sized>(&mut self, display: &mut D) -> Result<(), BrowseError> {
        loop {
            if self.needs_reload() {
                self.reload()?;
            }

            display.render(&self.view())?;

            let event = display.poll_event()?;
            if let KeypressResult::Quit = self.handle_event(event, display) {
                log::info!("quit requested in {}", self.current_dir().display());
                return Ok(());
            }
        }
    }

    /// Runs the event loop and tears the display down afterwards, whether the
    /// loop ended by quitting or by an error. The loop error wins over a
    /// teardown error.
    pub fn run_session<D: DisplayAdapter + ?Sized>(
        &mut self,
        display: &mut D,
    ) -> Result<(), BrowseError> {
        let result = self.run(display);
        let teardown = display.teardown();
        result?;
        teardown?;
        Ok(())
    }
}
