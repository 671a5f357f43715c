//! The run state machine: `(state, press) -> state'`.
//!
//! The caller loads the state, applies exactly one press, performs the
//! returned [`Effect`] (if any), and persists the new state.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::FlashcardError;
use crate::event::{ButtonPress, Effect, Mode, Step};
use crate::side::SidePolicy;
use crate::state::{Progress, RunState};

/// Apply one button press to a run.
///
/// In practice mode a run whose cursor walked past the last item is
/// reshuffled with `rng` and restarted. A practice run left with no items is
/// exhausted; check [`RunState::is_exhausted`] on the returned state.
///
/// # Errors
///
/// `InvalidSessionState` if `state` is not an active run, `UnsupportedPress`
/// if the button has no meaning in `mode` or for the current item.
pub fn apply<R: Rng + ?Sized>(
    mode: Mode,
    mut state: RunState,
    press: ButtonPress,
    sides: SidePolicy,
    rng: &mut R,
) -> Result<Step, FlashcardError> {
    state.validate()?;
    let unsupported = || FlashcardError::UnsupportedPress { mode, press };

    let effect = match mode {
        Mode::Review => review(&mut state, press, sides).ok_or_else(unsupported)?,
        Mode::Practice => practice(&mut state, press, sides).ok_or_else(unsupported)?,
    };

    let effect = match effect {
        Pending::None => None,
        Pending::Favorite(favorite) => {
            let id = state.current_id()?.ok_or_else(unsupported)?;
            Some(Effect::SetFavorite { id, favorite })
        }
        Pending::Edit => {
            let id = state.current_id()?.ok_or_else(unsupported)?;
            Some(Effect::Edit { id })
        }
    };

    if mode == Mode::Practice && !state.items.is_empty() && state.index == state.items.len() {
        state.items.shuffle(rng);
        state.index = 0;
        state.progress = Progress::new(0, state.items.len());
        tracing::info!(items = state.items.len(), "reshuffled practice run");
    }

    if mode == Mode::Review {
        state.progress = state.progress_for(Mode::Review);
    }

    tracing::debug!(
        %mode,
        %press,
        index = state.index,
        side = %state.side,
        remaining = state.items.len(),
        "applied press"
    );
    Ok(Step { state, effect })
}

/// Effect decided before the current item is known.
enum Pending {
    None,
    Favorite(bool),
    Edit,
}

fn review(state: &mut RunState, press: ButtonPress, sides: SidePolicy) -> Option<Pending> {
    let len = state.items.len();
    match press {
        ButtonPress::Flip => state.side = state.side.opposite(),
        ButtonPress::Previous => {
            state.index = (state.index + len - 1) % len;
            state.side = sides.prompt();
        }
        ButtonPress::Next => {
            state.index = (state.index + 1) % len;
            state.side = sides.prompt();
        }
        ButtonPress::Favorite => return Some(Pending::Favorite(true)),
        ButtonPress::Unfavorite => return Some(Pending::Favorite(false)),
        ButtonPress::Edit => return Some(Pending::Edit),
        ButtonPress::Correct | ButtonPress::Incorrect => return None,
    }
    Some(Pending::None)
}

fn practice(state: &mut RunState, press: ButtonPress, sides: SidePolicy) -> Option<Pending> {
    match press {
        ButtonPress::Flip => state.side = sides.answer(),
        ButtonPress::Correct => {
            state.items.remove(state.index);
            state.progress.completed += 1;
            state.side = sides.prompt();
        }
        ButtonPress::Incorrect => {
            state.index += 1;
            state.progress.completed += 1;
            state.side = sides.prompt();
        }
        ButtonPress::Favorite => return Some(Pending::Favorite(true)),
        ButtonPress::Unfavorite => return Some(Pending::Favorite(false)),
        ButtonPress::Previous | ButtonPress::Next | ButtonPress::Edit => return None,
    }
    Some(Pending::None)
}
