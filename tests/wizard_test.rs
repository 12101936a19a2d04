mod common;

use common::{Answer, ScriptedPrompter, TestEnv, USDC_EVM, USDC_EVM_UNIVERSAL, WSOL, WSOL_UNIVERSAL};
use serde_json::json;
use wormhole_config::commands::Status;
use wormhole_config::console::Console;
use wormhole_config::errors::AppError;
use wormhole_config::wizard::{PromptError, Wizard};
use wormhole_config::{Environment, UniversalAddressConverter};

const LITERAL_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn run_wizard(
    env: &TestEnv,
    preselected: Option<Environment>,
    answers: Vec<Answer>,
) -> (Result<bool, AppError>, ScriptedPrompter, String) {
    let store = env.store();
    let mut prompter = ScriptedPrompter::new(answers);
    let mut console = Console::new(Vec::new(), Vec::new(), 0);

    let result = Wizard::new(&mut prompter, &mut console, &store, &UniversalAddressConverter).run(preselected);

    let (out, _) = console.into_parts();
    (result, prompter, String::from_utf8(out).unwrap())
}

#[test]
fn test_multichain_wizard_saves_configuration() {
    let env = TestEnv::new();
    let answers = vec![
        Answer::Select(0),                // testnet
        Answer::Select(0),                // multi-chain bridge
        Answer::Input("1"),               // rejected: too few for multichain
        Answer::Input("2"),
        Answer::MultiSelect(vec![0]),     // rejected: wrong count
        Answer::MultiSelect(vec![0, 4]),  // ethereum, solana
        Answer::Select(0),                // ethereum is LOCKING
        // ethereum
        Answer::Select(0),
        Answer::Input("${ETH_KEY}"),
        Answer::Input("0x1234"),
        Answer::Input(USDC_EVM),
        // solana
        Answer::Select(1),
        Answer::Input("ftp://sol.example"),
        Answer::Input("https://sol.example"),
        Answer::Input(""),
        Answer::Input("${SOL_KEY}"),
        Answer::Input(WSOL),
        // save
        Answer::Select(0),
    ];

    let (result, prompter, out) = run_wizard(&env, None, answers);

    assert!(result.unwrap());
    assert!(prompter.is_exhausted());
    assert_eq!(
        prompter.rejections,
        vec![
            "A multichain deployment requires at least 2 chains. Please enter 2 or more, or choose single mode deployment.",
            "Please select exactly 2 chain(s)",
            "Invalid EVM address. Must start with 0x followed by 40 hex characters.",
            "RPC endpoint must start with http:// or https://",
            "Private key is required",
        ]
    );

    assert_eq!(
        env.read_config(),
        json!({
            "mainnet": {},
            "testnet": {
                "ethereum": {
                    "rpc": "https://ethereum-sepolia-rpc.publicnode.com",
                    "privateKey": "${ETH_KEY}",
                    "tokenAddress": USDC_EVM_UNIVERSAL,
                    "mode": "LOCKING"
                },
                "solana": {
                    "rpc": "https://sol.example",
                    "privateKey": "${SOL_KEY}",
                    "tokenAddress": WSOL_UNIVERSAL,
                    "mode": "BURNING"
                }
            },
            "devnet": {}
        })
    );

    assert!(out.contains("Configuring: Ethereum (LOCKING) [1/2]\n"));
    assert!(out.contains("Configuring: Solana (BURNING) [2/2]\n"));
    assert!(out.contains("  Example: ${SOLANA_PRIVATE_KEY}\n"));
    assert!(out.contains("  ✓ Converted: 0x069b8857...0001\n"));
    assert!(out.contains(
        "  • Ethereum [LOCKING]\n    RPC:   https://ethereum-sepolia-rpc.publicnode.com\n    Key:   ${ETH_KEY}\n    Token: 0x00000000...eb48\n"
    ));
    assert!(out.contains("✓ Configuration is valid\n"));
    assert!(out.ends_with(
        "Next steps:\n\n  1. Set your environment variables:\n     export ETH_KEY=\"your-private-key\"\n     export SOL_KEY=\"your-private-key\"\n\n  2. Verify your configuration:\n     wormhole validate --env testnet\n\n  3. View your configuration anytime:\n     wormhole config show\n\n"
    ));
}

#[test]
fn test_single_mode_wizard_declined_at_summary() {
    let env = TestEnv::new();
    let answers = vec![
        Answer::Select(1),              // single mode
        Answer::Input("1"),
        Answer::MultiSelect(vec![3]),   // base
        Answer::Select(0),
        Answer::Input("0x1234"),
        Answer::Input(USDC_EVM),
        Answer::Select(1),              // cancel
    ];

    let (result, prompter, out) = run_wizard(&env, Some(Environment::Mainnet), answers);

    assert!(!result.unwrap());
    assert!(prompter.rejections.is_empty());
    assert!(!prompter
        .prompts
        .iter()
        .any(|p| p.starts_with("Which environment") || p.starts_with("Which chain will hold")));
    assert!(out.contains("Environment: mainnet\n"));
    assert!(out.contains("Configuring: Base (BURNING) [1/1]\n"));
    assert!(out.contains("    RPC:   https://mainnet.base.org\n"));
    assert!(out.contains(
        "⚠ Warnings:\n\n   ⚠ Chain \"base\" has a suspiciously short private key. Consider using environment variable syntax: ${VAR_NAME}\n"
    ));
    assert!(out.ends_with("\n❌ Configuration cancelled.\n\n"));
    assert!(!env.config_path().exists());
}

#[test]
fn test_wizard_without_env_references_skips_export_step() {
    let env = TestEnv::new();
    let answers = vec![
        Answer::Select(2),              // devnet
        Answer::Select(1),
        Answer::Input("1"),
        Answer::MultiSelect(vec![0]),
        Answer::Select(0),
        Answer::Input(LITERAL_KEY),
        Answer::Input(USDC_EVM),
        Answer::Select(0),
    ];

    let (result, _, out) = run_wizard(&env, None, answers);

    assert!(result.unwrap());
    assert!(out.contains("    Key:   0xac0974be...ff80\n"));
    assert!(out.ends_with(
        "Next steps:\n\n  1. Verify your configuration:\n     wormhole validate --env devnet\n\n  2. View your configuration anytime:\n     wormhole config show\n\n"
    ));
    assert_eq!(env.read_config()["devnet"]["ethereum"]["rpc"], "http://localhost:8545");
}

#[test]
fn test_wizard_keeps_other_environments() {
    let env = TestEnv::new();
    env.write_config(
        &json!({ "mainnet": { "base": { "rpc": "https://base.example", "mode": "BURNING" } } }).to_string(),
    );
    let answers = vec![
        Answer::Select(1),
        Answer::Input("1"),
        Answer::MultiSelect(vec![1]),
        Answer::Select(0),
        Answer::Input("${ARB_KEY}"),
        Answer::Input(USDC_EVM),
        Answer::Select(0),
    ];

    let (result, _, _) = run_wizard(&env, Some(Environment::Testnet), answers);

    assert!(result.unwrap());
    let config = env.read_config();
    assert_eq!(config["mainnet"]["base"]["rpc"], "https://base.example");
    assert_eq!(config["testnet"]["arbitrum"]["mode"], "BURNING");
}

#[test]
fn test_interrupted_wizard_is_cancelled() {
    let env = TestEnv::new();
    let (result, _, _) = run_wizard(&env, None, vec![Answer::Select(0), Answer::Cancel]);

    assert!(matches!(result, Err(AppError::Prompt(PromptError::Cancelled))));
    assert!(!env.config_path().exists());
}

#[test]
fn test_wizard_command_reports_cancellation() {
    let env = TestEnv::new();
    let output = env.run_with_answers(&["wizard", "--env", "devnet"], vec![Answer::Cancel]);

    assert_eq!(output.status, Status::Failure);
    assert!(output.stdout.starts_with("\n🧙 Welcome to the Wormhole Multichain Configuration Wizard!\n\nEnvironment: devnet\n"));
    assert!(output.stdout.ends_with("\n❌ Configuration cancelled.\n\n"));
}
