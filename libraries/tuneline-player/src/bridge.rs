//! Dependency type of the player

use tuneline_core::PlaybackControl;

/// What a [`Player`](crate::Player) is wired to
///
/// Structural: every [`PlaybackControl`] value is a bridge, whether it is a
/// source adapter, a decorator node, or a boxed chain head. New backend kinds
/// and new decorators need no changes here.
pub trait ControlBridge: PlaybackControl {}

impl<T: PlaybackControl + ?Sized> ControlBridge for T {}
