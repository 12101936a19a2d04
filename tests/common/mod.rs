use clap::Parser;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wormhole_config::cli::Cli;
use wormhole_config::commands::{execute_command, Context, Status};
use wormhole_config::console::Console;
use wormhole_config::wizard::{PromptError, PromptResult, Prompter, Validator};
use wormhole_config::{ConfigStore, Environment, UniversalAddressConverter};

/// Stands in for the temp config path in captured output.
pub const CONFIG_PLACEHOLDER: &str = "[CONFIG]";

pub const USDC_EVM: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
pub const USDC_EVM_UNIVERSAL: &str = "0x000000000000000000000000a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
pub const WSOL: &str = "So11111111111111111111111111111111111111112";
pub const WSOL_UNIVERSAL: &str = "0x069b8857feab8184fb687f634618c035dac439dc1aeb3b5598a0f00000000001";

/// One scripted reply to a prompt.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Answer {
    Select(usize),
    MultiSelect(Vec<usize>),
    Input(&'static str),
    Cancel,
}

/// Replays answers in order. Rejected answers are recorded and the next
/// answer is tried, the way a user would type again.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub prompts: Vec<String>,
    pub rejections: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            ..Default::default()
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }

    fn next(&mut self, prompt: &str) -> PromptResult<Answer> {
        self.prompts.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(Answer::Cancel) | None => Err(PromptError::Cancelled),
            Some(answer) => Ok(answer),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, items: &[String], _default: usize) -> PromptResult<usize> {
        match self.next(prompt)? {
            Answer::Select(index) => {
                assert!(index < items.len(), "no item {index} for {prompt:?}");
                Ok(index)
            }
            other => panic!("expected a select answer for {prompt:?}, got {other:?}"),
        }
    }

    fn multi_select(
        &mut self,
        prompt: &str,
        _items: &[String],
        validate: Validator<'_, [usize]>,
    ) -> PromptResult<Vec<usize>> {
        loop {
            match self.next(prompt)? {
                Answer::MultiSelect(picked) => match validate(picked.as_slice()) {
                    Ok(()) => return Ok(picked),
                    Err(message) => self.rejections.push(message),
                },
                other => panic!("expected a multi-select answer for {prompt:?}, got {other:?}"),
            }
        }
    }

    fn input(
        &mut self,
        prompt: &str,
        _default: Option<&str>,
        validate: Validator<'_, str>,
    ) -> PromptResult<String> {
        loop {
            match self.next(prompt)? {
                Answer::Input(value) => match validate(value) {
                    Ok(()) => return Ok(value.to_string()),
                    Err(message) => self.rejections.push(message),
                },
                other => panic!("expected an input answer for {prompt:?}, got {other:?}"),
            }
        }
    }
}

#[derive(Debug)]
pub struct Output {
    pub status: Status,
    pub stdout: String,
    pub stderr: String,
}

/// A temp directory holding one deployment config file.
pub struct TestEnv {
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("wormhole.config.json")
    }

    pub fn store(&self) -> ConfigStore {
        ConfigStore::new(self.config_path())
    }

    pub fn write_config(&self, json: &str) {
        fs::write(self.config_path(), json).unwrap();
    }

    pub fn read_config(&self) -> serde_json::Value {
        let contents = fs::read_to_string(self.config_path()).unwrap();
        serde_json::from_str(&contents).unwrap()
    }

    /// Runs `wormhole <args>` against this directory's config file.
    /// Output is unwrapped unless `--width` is given.
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_answers(args, Vec::new())
    }

    pub fn run_with_answers(&self, args: &[&str], answers: Vec<Answer>) -> Output {
        let path = self.config_path();
        let mut argv = vec![
            "wormhole".to_string(),
            "--config".to_string(),
            path.display().to_string(),
        ];
        argv.extend(args.iter().map(|arg| arg.to_string()));
        let cli = Cli::try_parse_from(argv).expect("arguments should parse");

        let width = cli.width.map(|cols| cols as isize).unwrap_or(0);
        let converter = UniversalAddressConverter;
        let ctx = Context::new(ConfigStore::new(&path), &converter, Environment::Testnet);
        let mut console = Console::new(Vec::new(), Vec::new(), width);

        let status = execute_command(cli.command, &ctx, &mut console, || {
            Ok(ScriptedPrompter::new(answers))
        })
        .expect("command should not fail");

        let (out, err) = console.into_parts();
        let shown_path = path.display().to_string();
        Output {
            status,
            stdout: String::from_utf8(out).unwrap().replace(&shown_path, CONFIG_PLACEHOLDER),
            stderr: String::from_utf8(err).unwrap().replace(&shown_path, CONFIG_PLACEHOLDER),
        }
    }
}
