//! In-memory transport for unit tests.

use std::collections::HashMap;
use std::io;

use crate::status::Reply;
use crate::transport::{Passthrough, Transport};

/// A transport call as recorded by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Login(String),
    List(Option<String>, Option<String>),
    Select(String, bool),
    Search(Option<String>, String),
    Fetch(String, String),
    Store(String, String, String),
    Execute(Passthrough),
}

/// Answers every command `OK` unless told otherwise and records what it saw.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub calls: Vec<Call>,
    pub list_lines: Vec<String>,
    pub search_ids: String,
    pub failing_store: Option<String>,
    statuses: HashMap<&'static str, String>,
    broken: bool,
}

impl MockTransport {
    pub fn with_status(mut self, command: &'static str, status: &str) -> Self {
        self.statuses.insert(command, status.to_string());
        self
    }

    pub fn broken(mut self) -> Self {
        self.broken = true;
        self
    }

    pub fn selects(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Select(..)))
            .count()
    }

    pub fn stores(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Store(..)))
            .count()
    }

    fn reply<T>(&mut self, command: &'static str, call: Call, payload: T) -> io::Result<Reply<T>> {
        if self.broken {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "connection lost"));
        }
        self.calls.push(call);
        let status = self.statuses.get(command).map_or("OK", String::as_str);
        Ok(Reply::new(status, payload))
    }
}

impl Transport for MockTransport {
    type Fetched = Vec<String>;
    type Stored = String;

    fn login(&mut self, user: &str, _password: &str) -> io::Result<Reply<Vec<String>>> {
        let text = format!("LOGIN completed for {user}");
        self.reply("login", Call::Login(user.to_string()), vec![text])
    }

    fn list(
        &mut self,
        reference: Option<&str>,
        pattern: Option<&str>,
    ) -> io::Result<Reply<Vec<String>>> {
        let lines = self.list_lines.clone();
        let call = Call::List(reference.map(str::to_string), pattern.map(str::to_string));
        self.reply("list", call, lines)
    }

    fn select(&mut self, mailbox: &str, read_only: bool) -> io::Result<Reply<Vec<String>>> {
        let call = Call::Select(mailbox.to_string(), read_only);
        self.reply("select", call, vec!["3".to_string()])
    }

    fn search(
        &mut self,
        charset: Option<&str>,
        criteria: &str,
    ) -> io::Result<Reply<Vec<String>>> {
        let ids = self.search_ids.clone();
        let call = Call::Search(charset.map(str::to_string), criteria.to_string());
        self.reply("search", call, vec![ids])
    }

    fn fetch(&mut self, set: &str, items: &str) -> io::Result<Reply<Vec<String>>> {
        let call = Call::Fetch(set.to_string(), items.to_string());
        self.reply("fetch", call, vec![format!("{set} {items}")])
    }

    fn store(&mut self, item: &str, command: &str, flags: &str) -> io::Result<Reply<String>> {
        let call = Call::Store(item.to_string(), command.to_string(), flags.to_string());
        let mut reply = self.reply("store", call, format!("{item} {command} {flags}"))?;
        if self.failing_store.as_deref() == Some(item) {
            reply.status = "NO".to_string();
        }
        Ok(reply)
    }

    fn execute(&mut self, command: &Passthrough) -> io::Result<Reply<Vec<String>>> {
        let call = Call::Execute(command.clone());
        self.reply("execute", call, vec![command.name().to_string()])
    }
}
