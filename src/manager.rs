/// Group-chat orchestration: a manager that routes one task through a
/// fixed roster of agents, one turn each, in registration order.
use std::sync::Arc;

use anyhow::Result;

use crate::agents::Agent;

pub const TASK_SPEAKER: &str = "User";
pub const DEFAULT_MAX_ROUND: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTask {
    pub topic: String,
    pub prompt: String,
}

impl ChatTask {
    pub fn newsletter(topic: &str, tool_name: &str) -> Self {
        Self {
            topic: topic.to_string(),
            prompt: format!(
                "Task: 1) Reporter: fetch live data for the topic provided using the registered tool \
                 {tool_name}(topic). 2) Editor: when reporter finishes, summarize and produce a \
                 short newsletter intro (approx. 2-3 sentences). Topic: {topic}"
            ),
        }
    }
}

pub struct GroupChat {
    pub agents: Vec<Arc<dyn Agent>>,
    pub messages: Vec<ChatMessage>,
    pub max_round: usize,
}

impl GroupChat {
    pub fn new(agents: Vec<Arc<dyn Agent>>, max_round: usize) -> Self {
        Self {
            agents,
            messages: Vec::new(),
            max_round,
        }
    }

    /// Rounds needed for the task message plus one turn per agent.
    pub fn required_rounds(&self) -> usize {
        self.agents.len() + 1
    }

    pub fn transcript(&self) -> String {
        self.messages
            .iter()
            .map(|message| format!("{}: {}", message.speaker, message.content))
            .collect::<Vec<String>>()
            .join("\n")
    }
}

pub struct GroupChatManager {
    groupchat: GroupChat,
}

impl GroupChatManager {
    pub fn new(groupchat: GroupChat) -> Self {
        Self { groupchat }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.groupchat.messages
    }

    pub fn run(&mut self, task: &ChatTask) -> Result<String> {
        let chat = &mut self.groupchat;
        if chat.agents.is_empty() {
            return Err(anyhow::anyhow!("group chat has no agents to route the task to"));
        }
        if chat.max_round < chat.required_rounds() {
            return Err(anyhow::anyhow!(
                "group chat max_round={} is too small: {} rounds are needed for {} agents",
                chat.max_round,
                chat.required_rounds(),
                chat.agents.len()
            ));
        }

        chat.messages.clear();
        chat.messages.push(ChatMessage {
            speaker: TASK_SPEAKER.to_string(),
            content: task.prompt.clone(),
        });

        let mut input = task.topic.clone();
        for agent in &chat.agents {
            let reply = agent.handle_input(&input);
            if reply.trim().is_empty() {
                return Err(anyhow::anyhow!(
                    "agent '{}' returned an empty reply",
                    agent.name()
                ));
            }
            tracing::info!(
                speaker = agent.name(),
                round = chat.messages.len() + 1,
                "Group chat turn completed"
            );
            chat.messages.push(ChatMessage {
                speaker: agent.name().to_string(),
                content: reply.clone(),
            });
            input = reply;
        }

        Ok(chat.transcript())
    }
}
