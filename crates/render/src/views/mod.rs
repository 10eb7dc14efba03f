mod compare;
mod observability;
mod results;
mod search;

use api_universe_core::View;
use api_universe_service::AppState;

pub(crate) fn body(state: &AppState) -> Vec<String> {
    match state.view {
        View::Search => search::render(state),
        View::Results => results::render(state),
        View::Compare => compare::render(state),
        View::Observability => observability::render(),
    }
}
