//! Game configuration options.

/// Configuration options for a Go Fish game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use gofish::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(5)
///     .with_extra_turn_on_catch(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards dealt to each player when the game starts.
    pub hand_size: u8,
    /// Whether a successful request lets the player ask again.
    ///
    /// When `false`, every turn ends after its match step, even when the
    /// opponent handed over cards.
    pub extra_turn_on_catch: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 4,
            extra_turn_on_catch: false,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(7);
    /// assert_eq!(options.hand_size, 7);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: u8) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets whether a successful request grants another request.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_extra_turn_on_catch(true);
    /// assert_eq!(options.extra_turn_on_catch, true);
    /// ```
    #[must_use]
    pub const fn with_extra_turn_on_catch(mut self, enabled: bool) -> Self {
        self.extra_turn_on_catch = enabled;
        self
    }
}
