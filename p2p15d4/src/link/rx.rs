//! Handoff of received frames from the radio callback to a worker.
//!
//! The receive callback runs with a tight timing budget, so it only copies the
//! frame into an [`RxQueue`]. Decoding and printing happen later, in
//! [`RxQueue::process_pending`].

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::spsc::Queue;

use crate::frame::{FrameReport, ReceivedFrame, MAX_FRAME_LEN};

/// A copy of a buffer delivered by the receiver: the frame, a filler byte, the
/// RSSI and the LQI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    data: [u8; MAX_FRAME_LEN],
    len: usize,
}

impl RawFrame {
    /// Copy `length + 1` bytes of a received buffer, where `length` is its first
    /// byte. Returns `None` for an empty buffer.
    pub fn from_received(buffer: &[u8]) -> Option<Self> {
        let length = *buffer.first()? as usize;
        let len = (length + 1).min(buffer.len()).min(MAX_FRAME_LEN);

        let mut data = [0u8; MAX_FRAME_LEN];
        data[..len].copy_from_slice(&buffer[..len]);

        Some(Self { data, len })
    }

    /// Return the copied bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

/// A bounded queue of received frames, safe to fill from interrupt context.
///
/// New frames are dropped while the queue is full. The queue holds
/// [`RxQueue::capacity`] frames.
pub struct RxQueue<const N: usize> {
    queue: Mutex<RefCell<Queue<RawFrame, N>>>,
}

/// The receive queue sized by the `P2P15D4_RX_QUEUE_SIZE` build setting.
pub type DefaultRxQueue = RxQueue<{ crate::config::RX_QUEUE_SIZE }>;

impl<const N: usize> Default for RxQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RxQueue<N> {
    /// Create an empty queue. Usable in a `static`.
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Queue::new())),
        }
    }

    /// Return the number of frames the queue can hold.
    pub fn capacity(&self) -> usize {
        critical_section::with(|cs| self.queue.borrow_ref(cs).capacity())
    }

    /// Return the number of frames waiting.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.queue.borrow_ref(cs).len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Queue a buffer delivered by the receiver. Returns `false` when the frame
    /// was dropped.
    pub fn receive_done(&self, buffer: &[u8]) -> bool {
        if let Ok(frame) = ReceivedFrame::new(buffer) {
            let link_quality = frame.link_quality();
            trace!(
                "RX OK, received {} bytes with rssi: {} and lqi: {}",
                frame.length(),
                link_quality.rssi,
                link_quality.lqi
            );
        }

        let Some(frame) = RawFrame::from_received(buffer) else {
            warn!("Dropping empty receive buffer");
            return false;
        };

        critical_section::with(|cs| {
            let mut queue = self.queue.borrow_ref_mut(cs);
            if queue.enqueue(frame).is_err() {
                warn!("Receive queue full");
                false
            } else {
                true
            }
        })
    }

    /// Report the end of a transmission. The acknowledgment received for it,
    /// if any, is queued like a received frame. Returns `false` when there was
    /// no acknowledgment or it was dropped.
    pub fn transmit_done(&self, frame: &[u8], ack: Option<&[u8]>) -> bool {
        trace!(
            "TX OK, sent {} bytes, ack {}",
            frame.first().copied().unwrap_or(0),
            ack.is_some()
        );

        match ack {
            Some(ack) => self.receive_done(ack),
            None => false,
        }
    }

    /// Take the oldest queued frame.
    pub fn dequeue(&self) -> Option<RawFrame> {
        critical_section::with(|cs| self.queue.borrow_ref_mut(cs).dequeue())
    }

    /// Decode and log every queued frame. Returns the number of frames taken
    /// from the queue, including those that could not be decoded.
    pub fn process_pending(&self) -> usize {
        let mut processed = 0;

        while let Some(frame) = self.dequeue() {
            match FrameReport::parse(frame.as_bytes()) {
                Ok(report) => {
                    info!("{}", report);
                }
                Err(err) => {
                    warn!("Dropping undecodable frame: {}", err);
                }
            }
            processed += 1;
        }

        processed
    }
}
