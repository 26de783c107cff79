//! Stub LLM client for generator and route tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use promptchart_ai::{AiClient, AiError, Completion, CompletionOptions, TokenUsage};

use crate::generate::{ChartGenerator, GeneratorSettings};

pub(crate) enum Reply {
    Text(String),
    Fail(fn() -> AiError),
    Hang,
    Panic,
}

pub(crate) struct StubClient {
    reply: Reply,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubClient {
    pub(crate) fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    pub(crate) fn text(content: &str) -> Arc<Self> {
        Self::new(Reply::Text(content.to_string()))
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiClient for StubClient {
    async fn complete(
        &self,
        _system_prompt: &str,
        user_prompt: &str,
        _options: &CompletionOptions,
    ) -> Result<Completion, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(user_prompt.to_string());

        match &self.reply {
            Reply::Text(content) => Ok(Completion {
                content: content.clone(),
                usage: TokenUsage {
                    input_tokens: 120,
                    output_tokens: 80,
                },
            }),
            Reply::Fail(make) => Err(make()),
            Reply::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(AiError::Timeout)
            }
            Reply::Panic => panic!("stub client exploded"),
        }
    }

    fn model(&self) -> &str {
        "stub-model"
    }
}

pub(crate) fn generator(client: Arc<StubClient>) -> ChartGenerator {
    ChartGenerator::with_settings(client, GeneratorSettings::default())
}

/// Model output for `用柱状图展示：1月100，2月150，3月200`.
pub(crate) const MONTHLY_BAR_REPLY: &str = r#"{
  "title": { "text": "月度数据" },
  "xAxis": { "type": "category", "data": ["1月", "2月", "3月"] },
  "yAxis": { "type": "value" },
  "series": [{ "name": "数值", "type": "bar", "data": [100, 150, 200] }]
}"#;
