//! Keyword tables for command words and task types.
//!
//! A token matches the first entry whose canonical form *contains* the
//! uppercased token. The direction is keyword-contains-token: `DEL` and `LI`
//! resolve, `DELETES` does not. Table order decides ties (`MARK` wins over
//! `UNMARK` for `mark`, `DEADLINE` wins over `EVENT` for `e`).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandWord {
    Add,
    List,
    Mark,
    Unmark,
    Delete,
    Find,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskType {
    Todo,
    Deadline,
    Event,
}

const COMMAND_WORDS: &[(CommandWord, &str)] = &[
    (CommandWord::Add, "ADD"),
    (CommandWord::List, "LIST"),
    (CommandWord::Mark, "MARK"),
    (CommandWord::Unmark, "UNMARK"),
    (CommandWord::Delete, "DELETE"),
    (CommandWord::Find, "FIND"),
    (CommandWord::End, "END"),
];

const TASK_TYPES: &[(TaskType, &str)] = &[
    (TaskType::Todo, "TODO"),
    (TaskType::Deadline, "DEADLINE"),
    (TaskType::Event, "EVENT"),
];

impl CommandWord {
    pub fn resolve(token: &str) -> Option<Self> {
        resolve(COMMAND_WORDS, token)
    }
}

impl TaskType {
    pub fn resolve(token: &str) -> Option<Self> {
        resolve(TASK_TYPES, token)
    }
}

fn resolve<K: Copy>(table: &[(K, &'static str)], token: &str) -> Option<K> {
    // An empty token is contained in every keyword; treat it as no match.
    if token.is_empty() {
        return None;
    }
    let upper = token.to_uppercase();
    table
        .iter()
        .find(|(_, canonical)| canonical.contains(upper.as_str()))
        .map(|(keyword, _)| *keyword)
}
