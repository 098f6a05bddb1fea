use color_eyre::Result;
use color_eyre::eyre::eyre;

use crate::app::{App, Command};
use crate::event::{Event, EventHandler};
use crate::system::provider::MetricsProvider;

/// Carries out a state machine command against the event queue.
pub fn apply(events: &mut EventHandler, command: Command) {
    match command {
        Command::ScheduleTick(delay) => events.schedule_tick(delay),
        Command::Quit => events.cancel_tick(),
        Command::None => {}
    }
}

/// Dispatches one event. Loss of terminal input is fatal.
pub fn step<P: MetricsProvider>(
    app: &mut App<P>,
    events: &mut EventHandler,
    event: &Event,
) -> Result<()> {
    if *event == Event::InputClosed {
        return Err(eyre!("terminal input stream closed"));
    }
    let command = app.handle_event(event);
    apply(events, command);
    Ok(())
}

/// Runs the session until the app terminates, handing each rendered view to
/// `present`. No view is presented after termination.
pub async fn drive<P, F>(app: &mut App<P>, events: &mut EventHandler, mut present: F) -> Result<()>
where
    P: MetricsProvider,
    F: FnMut(&str) -> Result<()>,
{
    apply(events, app.init());
    present(&app.render())?;

    while app.is_running() {
        let Some(event) = events.next().await else {
            return Err(eyre!("event queue closed unexpectedly"));
        };
        step(app, events, &event)?;

        if app.is_running() {
            present(&app.render())?;
        }
    }

    Ok(())
}
