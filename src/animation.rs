//! Typewriter animation for the home page headline.
//!
//! Drives the reveal/erase cycle over a fixed list of phrases. The whole
//! thing is deadline-based: the animator owns exactly one pending deadline
//! and does nothing until the host feeds it a tick whose timestamp has
//! passed that deadline. Stopping the animator clears the deadline, so no
//! further display change can happen afterwards.
//!
//! The blinking cursor is a separate toggle with its own interval and has
//! no dependency on the typing phase.
use std::time::{Duration, Instant};

use thiserror::Error;

/// Delay between revealed characters while typing.
pub const DEFAULT_TYPE_DELAY: Duration = Duration::from_millis(100);

/// Pause after a phrase is fully typed, before erasing starts.
pub const DEFAULT_HOLD_DELAY: Duration = Duration::from_millis(2000);

/// Delay between removed characters while erasing.
pub const DEFAULT_ERASE_DELAY: Duration = Duration::from_millis(50);

/// Interval between cursor visibility toggles.
pub const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(800);

// Zero delays would make a tick due forever; clamp instead of erroring
// since a sloppy delay value must never take the UI down.
const MIN_DELAY: Duration = Duration::from_millis(1);

/// Errors the animator can produce.
///
/// Construction is the only fallible operation; ticking and stopping
/// cannot fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AnimationError
{
    /// The phrase list was empty.
    #[error("invalid config: the phrase list must not be empty")]
    InvalidConfig,
}

/// Delays governing the typewriter cycle, all in wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingConfig
{
    /// Delay between revealing each character
    pub type_delay: Duration,
    /// Pause after a phrase is fully typed
    pub hold_delay: Duration,
    /// Delay between removing each character
    pub erase_delay: Duration,
}

impl Default for TypingConfig
{
    fn default() -> Self
    {
        Self {
            type_delay: DEFAULT_TYPE_DELAY,
            hold_delay: DEFAULT_HOLD_DELAY,
            erase_delay: DEFAULT_ERASE_DELAY,
        }
    }
}

impl TypingConfig
{
    /// Raises every delay to at least `MIN_DELAY`.
    ///
    /// # Returns
    ///
    /// The same config with sub-millisecond or zero delays clamped.
    #[must_use]
    fn clamped(self) -> Self
    {
        Self {
            type_delay: self.type_delay.max(MIN_DELAY),
            hold_delay: self.hold_delay.max(MIN_DELAY),
            erase_delay: self.erase_delay.max(MIN_DELAY),
        }
    }
}

/// Stage of the typewriter cycle for the current phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase
{
    /// Characters are being revealed one by one
    Growing,
    /// The full phrase is on screen, waiting before erase
    Holding,
    /// Characters are being removed one by one
    Shrinking,
}

/// Typewriter state machine over a fixed, non-empty phrase list.
///
/// Cycles Growing -> Holding -> Shrinking per phrase and then advances to
/// the next phrase, wrapping around indefinitely. The displayed text is
/// always a character prefix of the current phrase.
pub struct TypingAnimator
{
    /// Phrases to cycle through, fixed at construction
    phrases: Vec<String>,
    /// Delays between transitions
    config: TypingConfig,
    /// Index of the phrase currently being animated
    index: usize,
    /// Number of characters currently revealed
    shown: usize,
    /// The revealed prefix of the current phrase
    display: String,
    /// Current stage of the cycle
    phase: Phase,
    /// The single pending deadline; `None` means stopped
    next_due: Option<Instant>,
}

impl TypingAnimator
{
    /// Creates an animator over the given phrases.
    ///
    /// The animator starts disarmed; call [`start`](Self::start) to begin
    /// the cycle. Delay values of zero are clamped to a minimum positive
    /// value rather than rejected.
    ///
    /// # Arguments
    ///
    /// * `phrases` - The phrases to type and erase, in order
    /// * `config` - Delays for the typing, holding and erasing stages
    ///
    /// # Returns
    ///
    /// A new `TypingAnimator`, or `AnimationError::InvalidConfig` if
    /// `phrases` is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the phrase list is empty.
    pub fn new(phrases: Vec<String>, config: TypingConfig) -> Result<Self, AnimationError>
    {
        if phrases.is_empty()
        {
            return Err(AnimationError::InvalidConfig);
        }

        Ok(Self {
            phrases,
            config: config.clamped(),
            index: 0,
            shown: 0,
            display: String::new(),
            phase: Phase::Growing,
            next_due: None,
        })
    }

    /// Begins the cycle at the first phrase.
    ///
    /// Resets any previous progress and arms the deadline so that the
    /// first character appears on the next tick. Restarting a running
    /// animator is allowed and starts the cycle over.
    ///
    /// # Arguments
    ///
    /// * `now` - The current timestamp
    pub fn start(&mut self, now: Instant)
    {
        self.index = 0;
        self.shown = 0;
        self.display.clear();
        self.phase = Phase::Growing;
        self.next_due = Some(now);
    }

    /// Cancels the pending deadline.
    ///
    /// Idempotent and safe to call in any state. After this, ticks are
    /// no-ops and the display never changes again until `start` is called.
    pub fn stop(&mut self)
    {
        self.next_due = None;
    }

    /// Whether a deadline is currently armed.
    #[must_use]
    pub const fn is_running(&self) -> bool
    {
        self.next_due.is_some()
    }

    /// Advances the state machine if the pending deadline has passed.
    ///
    /// Each call performs at most one transition and re-arms the deadline,
    /// so there is never more than one pending deadline.
    ///
    /// # Arguments
    ///
    /// * `now` - The current timestamp
    ///
    /// # Returns
    ///
    /// `true` if the displayed text changed, `false` if the tick was early,
    /// the animator is stopped, or the transition was phase-only.
    pub fn tick(&mut self, now: Instant) -> bool
    {
        let Some(due) = self.next_due
        else
        {
            return false;
        };

        if now < due
        {
            return false;
        }

        match self.phase
        {
            Phase::Growing =>
            {
                // `shown` counts characters, not bytes
                if let Some(next_char) = self.phrases[self.index].chars().nth(self.shown)
                {
                    self.display.push(next_char);
                    self.shown += 1;
                    self.next_due = Some(now + self.config.type_delay);
                    true
                }
                else
                {
                    self.phase = Phase::Holding;
                    self.next_due = Some(now + self.config.hold_delay);
                    false
                }
            }
            Phase::Holding =>
            {
                self.phase = Phase::Shrinking;
                self.next_due = Some(now + self.config.erase_delay);
                false
            }
            Phase::Shrinking =>
            {
                if self.display.pop().is_some()
                {
                    self.shown -= 1;
                    self.next_due = Some(now + self.config.erase_delay);
                    true
                }
                else
                {
                    // Wrap around to the next phrase and type it right away
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Growing;
                    self.next_due = Some(now);
                    false
                }
            }
        }
    }

    /// The currently revealed prefix of the current phrase.
    #[must_use]
    pub fn display_text(&self) -> &str
    {
        &self.display
    }

    /// Index of the phrase currently being animated.
    #[must_use]
    pub const fn phrase_index(&self) -> usize
    {
        self.index
    }

    /// Current stage of the cycle.
    #[must_use]
    pub const fn phase(&self) -> Phase
    {
        self.phase
    }
}

/// Cosmetic cursor blink, decoupled from the typing cycle.
pub struct CursorBlink
{
    /// Whether the cursor glyph is currently drawn
    visible: bool,
    /// Time between visibility toggles
    interval: Duration,
    /// When the next toggle is due
    next_toggle: Instant,
}

impl CursorBlink
{
    /// Creates a blinker that starts visible.
    ///
    /// # Arguments
    ///
    /// * `now` - The current timestamp
    #[must_use]
    pub fn new(now: Instant) -> Self
    {
        Self {
            visible: true,
            interval: CURSOR_BLINK_INTERVAL,
            next_toggle: now + CURSOR_BLINK_INTERVAL,
        }
    }

    /// Toggles visibility for every elapsed interval.
    ///
    /// # Arguments
    ///
    /// * `now` - The current timestamp
    ///
    /// # Returns
    ///
    /// `true` if the visibility changed.
    pub fn tick(&mut self, now: Instant) -> bool
    {
        let mut changed = false;

        // Catch up if ticks arrived late
        while now >= self.next_toggle
        {
            self.visible = !self.visible;
            self.next_toggle += self.interval;
            changed = true;
        }

        changed
    }

    /// Whether the cursor glyph should be drawn.
    #[must_use]
    pub const fn is_visible(&self) -> bool
    {
        self.visible
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    const fn ms(amount: u64) -> Duration
    {
        Duration::from_millis(amount)
    }

    fn quick_config() -> TypingConfig
    {
        TypingConfig {
            type_delay: ms(10),
            hold_delay: ms(50),
            erase_delay: ms(5),
        }
    }

    fn animator(phrases: &[&str]) -> TypingAnimator
    {
        let phrases = phrases
            .iter()
            .map(|phrase| (*phrase).to_owned())
            .collect();
        TypingAnimator::new(phrases, quick_config()).unwrap()
    }

    /// Drives the animator with 1ms steps until the predicate holds,
    /// checking the prefix invariant the whole way.
    fn run_until(
        anim: &mut TypingAnimator,
        mut now: Instant,
        max_steps: usize,
        mut done: impl FnMut(&TypingAnimator) -> bool,
    ) -> Instant
    {
        for _ in 0..max_steps
        {
            if done(anim)
            {
                return now;
            }
            now += ms(1);
            anim.tick(now);
            assert!(
                anim.phrases[anim.phrase_index()].starts_with(anim.display_text()),
                "display must stay a prefix of the current phrase"
            );
        }
        panic!("animator did not reach the expected state in {max_steps} steps");
    }

    #[test]
    fn empty_phrase_list_is_rejected()
    {
        let result = TypingAnimator::new(Vec::new(), TypingConfig::default());
        assert_eq!(result.err(), Some(AnimationError::InvalidConfig));
    }

    #[test]
    fn growing_types_the_full_phrase()
    {
        let mut anim = animator(&["Hi"]);
        let start = Instant::now();
        anim.start(start);
        assert_eq!(anim.display_text(), "");

        // First deadline is armed at `start` itself
        assert!(anim.tick(start));
        assert_eq!(anim.display_text(), "H");

        let now = start + ms(10);
        assert!(anim.tick(now));
        assert_eq!(anim.display_text(), "Hi");
        assert_eq!(anim.phase(), Phase::Growing);

        // Next tick completes growing without changing the text
        assert!(!anim.tick(now + ms(10)));
        assert_eq!(anim.display_text(), "Hi");
        assert_eq!(anim.phase(), Phase::Holding);
    }

    #[test]
    fn early_tick_is_a_no_op()
    {
        let mut anim = animator(&["Hi"]);
        let start = Instant::now();
        anim.start(start);
        anim.tick(start);
        assert_eq!(anim.display_text(), "H");

        // Deadline is at start + 10ms; 3ms in nothing happens
        assert!(!anim.tick(start + ms(3)));
        assert_eq!(anim.display_text(), "H");
    }

    #[test]
    fn full_cycle_advances_the_phrase_index_by_one()
    {
        let mut anim = animator(&["Hi", "Yo"]);
        let now = Instant::now();
        anim.start(now);

        run_until(&mut anim, now, 1_000, |anim| anim.phrase_index() == 1);
        assert_eq!(anim.phase(), Phase::Growing);
        assert_eq!(anim.display_text(), "");
    }

    #[test]
    fn index_wraps_back_after_a_round_of_all_phrases()
    {
        let mut anim = animator(&["Hi", "Yo"]);
        let mut now = Instant::now();
        anim.start(now);

        now = run_until(&mut anim, now, 1_000, |anim| anim.phrase_index() == 1);
        // Wait for the wrap back to phrase 0 having typed at least one char
        run_until(&mut anim, now, 1_000, |anim| {
            anim.phrase_index() == 0 && !anim.display_text().is_empty()
        });
    }

    #[test]
    fn single_phrase_cycles_without_leaving_index_zero()
    {
        let mut anim = animator(&["x"]);
        let mut now = Instant::now();
        anim.start(now);

        // Two full type/hold/erase rounds
        for _ in 0..2
        {
            now = run_until(&mut anim, now, 1_000, |anim| anim.display_text() == "x");
            now = run_until(&mut anim, now, 1_000, |anim| {
                anim.phase() == Phase::Shrinking && anim.display_text().is_empty()
            });
            assert_eq!(anim.phrase_index(), 0);
        }
    }

    #[test]
    fn erase_walks_back_through_the_prefixes()
    {
        let mut anim = animator(&["Hi"]);
        let mut now = Instant::now();
        anim.start(now);

        now = run_until(&mut anim, now, 1_000, |anim| anim.phase() == Phase::Holding);

        // Holding -> Shrinking after the hold delay, text untouched
        now += ms(50);
        assert!(!anim.tick(now));
        assert_eq!(anim.phase(), Phase::Shrinking);
        assert_eq!(anim.display_text(), "Hi");

        now += ms(5);
        assert!(anim.tick(now));
        assert_eq!(anim.display_text(), "H");

        now += ms(5);
        assert!(anim.tick(now));
        assert_eq!(anim.display_text(), "");
    }

    #[test]
    fn stop_mid_growing_freezes_the_display()
    {
        let mut anim = animator(&["Hi"]);
        let start = Instant::now();
        anim.start(start);
        anim.tick(start);
        assert_eq!(anim.display_text(), "H");

        anim.stop();
        assert!(!anim.is_running());

        // A manual tick long after the old deadline changes nothing
        assert!(!anim.tick(start + ms(1_000)));
        assert_eq!(anim.display_text(), "H");
    }

    #[test]
    fn stop_is_idempotent()
    {
        let mut anim = animator(&["Hi"]);
        anim.start(Instant::now());
        anim.stop();
        anim.stop();
        assert!(!anim.is_running());
    }

    #[test]
    fn restart_begins_again_at_the_first_phrase()
    {
        let mut anim = animator(&["Hi", "Yo"]);
        let mut now = Instant::now();
        anim.start(now);
        now = run_until(&mut anim, now, 1_000, |anim| anim.phrase_index() == 1);

        anim.start(now);
        assert_eq!(anim.phrase_index(), 0);
        assert_eq!(anim.display_text(), "");
        assert_eq!(anim.phase(), Phase::Growing);
        assert!(anim.is_running());
    }

    #[test]
    fn zero_delays_are_clamped_and_stay_live()
    {
        let config = TypingConfig {
            type_delay: Duration::ZERO,
            hold_delay: Duration::ZERO,
            erase_delay: Duration::ZERO,
        };
        let mut anim = TypingAnimator::new(vec![String::from("ab")], config).unwrap();
        let now = Instant::now();
        anim.start(now);

        run_until(&mut anim, now, 1_000, |anim| anim.display_text() == "ab");
    }

    #[test]
    fn multibyte_phrases_erase_cleanly()
    {
        let mut anim = animator(&["héllo"]);
        let mut now = Instant::now();
        anim.start(now);

        now = run_until(&mut anim, now, 1_000, |anim| anim.display_text() == "héllo");
        run_until(&mut anim, now, 1_000, |anim| {
            anim.phase() == Phase::Shrinking && anim.display_text().is_empty()
        });
    }

    #[test]
    fn cursor_blink_toggles_on_its_interval()
    {
        let start = Instant::now();
        let mut cursor = CursorBlink::new(start);
        assert!(cursor.is_visible());

        assert!(!cursor.tick(start + ms(100)));
        assert!(cursor.is_visible());

        assert!(cursor.tick(start + CURSOR_BLINK_INTERVAL));
        assert!(!cursor.is_visible());

        // A late tick spanning two intervals lands back on visible
        assert!(cursor.tick(start + CURSOR_BLINK_INTERVAL * 3));
        assert!(cursor.is_visible());
    }
}
