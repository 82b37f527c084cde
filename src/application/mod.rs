//! Application layer orchestrating the receipt workflow.
//!
//! This module defines the `ReceiptService`, which validates submissions,
//! hands accepted receipts to the configured store and scores them on request.

pub mod service;
