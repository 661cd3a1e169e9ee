//! Request queue between event ingestion and batch processing.
//!
//! An unbounded FIFO channel: any number of writers append without
//! blocking, a single receiver drains from the head. There is no
//! deduplication; the same request id may be queued any number of times.

use thiserror::Error;
use tokio::sync::mpsc;

use crate::domain::PendingRequest;

/// Returned when enqueuing after the processor has gone away.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("request queue closed, dropping request {} from {}", .0.id(), .0.caller())]
pub struct QueueClosed(pub PendingRequest);

/// Create a new, empty request queue.
pub fn request_queue() -> (RequestSender, RequestReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (RequestSender { tx }, RequestReceiver { rx })
}

/// Writing half of the request queue.
#[derive(Debug, Clone)]
pub struct RequestSender {
    tx: mpsc::UnboundedSender<PendingRequest>,
}

impl RequestSender {
    /// Append a request to the tail of the queue. Never blocks.
    ///
    /// # Errors
    ///
    /// Returns [`QueueClosed`] with the rejected request if the receiving
    /// half has been dropped.
    pub fn enqueue(&self, request: PendingRequest) -> Result<(), QueueClosed> {
        self.tx
            .send(request)
            .map_err(|mpsc::error::SendError(request)| QueueClosed(request))
    }
}

/// Draining half of the request queue.
#[derive(Debug)]
pub struct RequestReceiver {
    rx: mpsc::UnboundedReceiver<PendingRequest>,
}

impl RequestReceiver {
    /// Remove and return the oldest queued request, if any. Never waits.
    pub fn pop(&mut self) -> Option<PendingRequest> {
        self.rx.try_recv().ok()
    }

    /// Number of requests currently waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::request;

    #[test]
    fn pops_in_fifo_order() {
        let (tx, mut rx) = request_queue();
        for id in 1..=3 {
            tx.enqueue(request(1, id)).unwrap();
        }

        assert_eq!(rx.len(), 3);
        assert_eq!(rx.pop(), Some(request(1, 1)));
        assert_eq!(rx.pop(), Some(request(1, 2)));
        assert_eq!(rx.pop(), Some(request(1, 3)));
        assert_eq!(rx.pop(), None);
        assert!(rx.is_empty());
    }

    #[test]
    fn keeps_duplicate_requests() {
        let (tx, mut rx) = request_queue();
        tx.enqueue(request(7, 42)).unwrap();
        tx.enqueue(request(7, 42)).unwrap();

        assert_eq!(rx.pop(), Some(request(7, 42)));
        assert_eq!(rx.pop(), Some(request(7, 42)));
    }

    #[test]
    fn cloned_senders_share_one_queue() {
        let (tx, mut rx) = request_queue();
        let other = tx.clone();
        tx.enqueue(request(1, 1)).unwrap();
        other.enqueue(request(2, 2)).unwrap();

        assert_eq!(rx.len(), 2);
        assert_eq!(rx.pop(), Some(request(1, 1)));
        assert_eq!(rx.pop(), Some(request(2, 2)));
    }

    #[test]
    fn enqueue_after_receiver_dropped_returns_request() {
        let (tx, rx) = request_queue();
        drop(rx);

        let err = tx.enqueue(request(3, 9)).unwrap_err();
        assert_eq!(err.0, request(3, 9));
    }
}
