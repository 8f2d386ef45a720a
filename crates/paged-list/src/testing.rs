//! Test doubles: a scripted transport and a tokio-backed sleeper.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::debounce::Sleeper;
use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Transport};

struct Scripted {
    delay: Duration,
    result: Result<ApiResponse, ApiError>,
}

#[derive(Default)]
struct MockState {
    script: VecDeque<Scripted>,
    requests: Vec<(Instant, ApiRequest)>,
}

/// Replays queued responses in request order and records every request
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Rc<RefCell<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(&self, status: u16, body: &str) {
        self.respond_after(Duration::ZERO, status, body);
    }

    pub fn respond_after(&self, delay: Duration, status: u16, body: &str) {
        self.inner.borrow_mut().script.push_back(Scripted {
            delay,
            result: Ok(ApiResponse::new(status, body)),
        });
    }

    pub fn fail_with(&self, err: ApiError) {
        self.inner.borrow_mut().script.push_back(Scripted {
            delay: Duration::ZERO,
            result: Err(err),
        });
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner
            .borrow()
            .requests
            .iter()
            .map(|(_, r)| r.clone())
            .collect()
    }

    pub fn sent_at(&self) -> Vec<Instant> {
        self.inner.borrow().requests.iter().map(|(at, _)| *at).collect()
    }

    pub fn request_count(&self) -> usize {
        self.inner.borrow().requests.len()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let scripted = {
            let mut state = self.inner.borrow_mut();
            state.requests.push((Instant::now(), request.clone()));
            state.script.pop_front()
        };
        let Some(scripted) = scripted else {
            return Err(ApiError::Transport(format!(
                "no scripted response for {}",
                request.target()
            )));
        };
        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        scripted.result
    }
}

pub struct TokioSleeper;

#[async_trait(?Send)]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
