//! Root modal actions

use crate::state::RootModal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Present a root modal; this also ends the start flow
    Present(RootModal),
}
