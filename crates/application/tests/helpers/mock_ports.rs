#![allow(dead_code)]

use cachedump_application::ports::{DumpSource, OutputSink};
use cachedump_domain::DomainError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock DumpSource
// ============================================================================

pub struct MockDumpSource {
    name: String,
    text: Option<String>,
    reads: AtomicUsize,
}

impl MockDumpSource {
    pub fn new(name: &str, text: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            text: Some(text.to_string()),
            reads: AtomicUsize::new(0),
        })
    }

    /// A source whose read always fails
    pub fn unreadable(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            text: None,
            reads: AtomicUsize::new(0),
        })
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl DumpSource for MockDumpSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn read_to_string(&self) -> Result<String, DomainError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.text
            .clone()
            .ok_or_else(|| DomainError::InputUnreadable {
                origin: self.name.clone(),
                reason: "mock source failure".to_string(),
            })
    }
}

// ============================================================================
// Mock OutputSink
// ============================================================================

#[derive(Default)]
pub struct MockOutputSink {
    written: Mutex<Vec<String>>,
    should_fail: bool,
}

impl MockOutputSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            written: Mutex::new(Vec::new()),
            should_fail: true,
        })
    }

    /// Everything written so far, concatenated
    pub fn output(&self) -> String {
        self.written.lock().unwrap().concat()
    }

    pub fn write_count(&self) -> usize {
        self.written.lock().unwrap().len()
    }
}

impl OutputSink for MockOutputSink {
    fn describe(&self) -> String {
        "mock sink".to_string()
    }

    fn write_all(&self, text: &str) -> Result<(), DomainError> {
        if self.should_fail {
            return Err(DomainError::OutputUnwritable {
                destination: self.describe(),
                reason: "mock sink failure".to_string(),
            });
        }
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
