//! State identifiers.

use std::fmt;

/// Names one state within one machine kind's enumerated domain.
///
/// Implementations are expected to be closed, fieldless enums: [`ALL`]
/// lists every identifier exactly once and [`index`] maps each to a
/// distinct slot in `0..COUNT`. Registry construction and lookup rely on
/// that contract; the [`state_id!`](crate::state_id) macro derives it
/// mechanically, with the compiler checking density.
///
/// [`ALL`]: StateId::ALL
/// [`index`]: StateId::index
pub trait StateId: Copy + Eq + fmt::Debug + Sized + 'static {
    /// Number of states in the domain.
    const COUNT: usize;

    /// Every identifier in the domain, in `index` order.
    const ALL: &'static [Self];

    /// Dense ordinal of this identifier, strictly less than `COUNT`.
    fn index(self) -> usize;
}

/// Declares a closed state-identifier enum and implements [`StateId`] for
/// it.
///
/// ```rust
/// stator_core::state_id! {
///     /// States of a turnstile.
///     pub enum TurnstileId {
///         Locked,
///         Unlocked,
///     }
/// }
///
/// use stator_core::StateId;
/// assert_eq!(TurnstileId::COUNT, 2);
/// assert_eq!(TurnstileId::Unlocked.index(), 1);
/// ```
#[macro_export]
macro_rules! state_id {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $crate::StateId for $name {
            const COUNT: usize = <Self as $crate::StateId>::ALL.len();
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn index(self) -> usize {
                self as usize
            }
        }
    };
}
