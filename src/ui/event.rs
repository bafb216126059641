//! Event handling module for the application
//!
//! A background thread polls the terminal for input and forwards keyboard
//! and resize events over a channel, interleaved with periodic tick events
//! that drive the animations. The main loop blocks on the channel, so it
//! wakes exactly when there is something to do.
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

/// Events that can be processed by the application
#[derive(Debug, Clone, Copy)]
pub enum Event
{
    /// Regular time tick, the clock source for the animations
    Tick,
    /// Keyboard input event
    Key(KeyEvent),
    /// Terminal resize event with new dimensions
    Resize(u16, u16),
}

/// Handles terminal events
///
/// Owns the polling thread and hands events out through a channel. The
/// thread is asked to stop and joined on drop.
pub struct EventHandler
{
    /// Receiver side of the event channel
    event_receiver: mpsc::Receiver<Event>,
    /// Sender used to tell the thread to stop
    // The receiver is moved to the thread
    shutdown_sender: mpsc::Sender<()>,
    /// Handle to the polling thread
    // Option so the handle can be taken in `drop` for joining
    thread_handle: Option<JoinHandle<()>>,
}

impl EventHandler
{
    /// Creates a new event handler with the specified tick rate.
    ///
    /// The tick rate bounds the animation granularity; it should be no
    /// coarser than the shortest configured animation delay.
    ///
    /// # Arguments
    ///
    /// * `tick_rate` - The duration between tick events
    ///
    /// # Returns
    ///
    /// A new `EventHandler` with a running background thread.
    #[must_use]
    pub fn new(tick_rate: Duration) -> Self
    {
        let (event_sender, event_receiver) = mpsc::channel();
        let (shutdown_sender, shutdown_receiver) = mpsc::channel();

        let handle = thread::spawn(move || {
            let mut last_tick = Instant::now();

            loop
            {
                if shutdown_receiver.try_recv().is_ok()
                {
                    break;
                }

                // Wait at most until the next tick is due
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                // Poll for crossterm events; the timeout keeps ticks flowing
                // even when the keyboard is idle
                let ready = match event::poll(timeout)
                {
                    Ok(ready) => ready,
                    Err(_) => break,
                };

                if ready
                {
                    let forwarded = match event::read()
                    {
                        Ok(CrosstermEvent::Key(key)) =>
                        {
                            event_sender.send(Event::Key(key))
                        }
                        Ok(CrosstermEvent::Resize(width, height)) =>
                        {
                            event_sender.send(Event::Resize(width, height))
                        }
                        // Ignore mouse, focus and paste events
                        Ok(_) => Ok(()),
                        Err(_) => break,
                    };

                    // Receiver dropped, nothing left to do
                    if forwarded.is_err()
                    {
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate
                {
                    if event_sender.send(Event::Tick).is_err()
                    {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self {
            event_receiver,
            shutdown_sender,
            thread_handle: Some(handle),
        }
    }

    /// Gets the next event, blocking until one is available.
    ///
    /// # Returns
    ///
    /// The next event.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel is disconnected.
    pub fn next(&self) -> Result<Event>
    {
        self.event_receiver
            .recv()
            .context("Event channel disconnected")
    }
}

impl Drop for EventHandler
{
    fn drop(&mut self)
    {
        // Signal shutdown (ignore if already closed)
        let _ = self.shutdown_sender.send(());

        if let Some(handle) = self.thread_handle.take()
        {
            let _ = handle.join();
        }
    }
}
