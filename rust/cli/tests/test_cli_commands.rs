use std::io::Cursor;
use std::io::Write as _;

use headsup_cli::run_with_input;
use serial_test::serial;

struct TempEnvVar {
    key: &'static str,
    previous: Option<String>,
}

impl TempEnvVar {
    fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        // SAFETY: every test that touches the environment is #[serial].
        unsafe { std::env::set_var(key, value) };
        Self { key, previous }
    }
}

impl Drop for TempEnvVar {
    fn drop(&mut self) {
        // SAFETY: see `TempEnvVar::set`.
        unsafe {
            match &self.previous {
                Some(prev) => std::env::set_var(self.key, prev),
                None => std::env::remove_var(self.key),
            }
        }
    }
}

fn run(args: &[&str], input: &str) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let code = run_with_input(args.iter().copied(), &mut out, &mut err, &mut stdin);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn help_lists_expected_commands() {
    let (code, stdout, _) = run(&["headsup", "--help"], "");
    assert_eq!(code, 0);
    for cmd in ["play", "eval", "equity", "deal", "sim", "cfg"] {
        assert!(stdout.contains(cmd), "help should list subcommand `{}`", cmd);
    }
}

#[test]
#[serial]
fn cfg_shows_default_settings() {
    let (code, stdout, _) = run(&["headsup", "cfg"], "");
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["starting_chips"]["value"], 1000);
    assert_eq!(json["ai"]["value"], "baseline");
}

#[test]
#[serial]
fn cfg_reads_config_file_and_env_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "starting_chips = 250\nsamples = 64").unwrap();
    let _cfg = TempEnvVar::set("HEADSUP_CONFIG", file.path().to_str().unwrap());
    let _chips = TempEnvVar::set("HEADSUP_CHIPS", "300");

    let (code, stdout, _) = run(&["headsup", "cfg"], "");
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["starting_chips"]["value"], 300);
    assert_eq!(json["starting_chips"]["source"], "env");
    assert_eq!(json["samples"]["value"], 64);
    assert_eq!(json["samples"]["source"], "file");
}

#[test]
#[serial]
fn invalid_config_fails_commands_that_use_it() {
    let _ai = TempEnvVar::set("HEADSUP_AI", "shark");
    let (code, _, stderr) = run(&["headsup", "sim", "--hands", "1"], "");
    assert_eq!(code, 2);
    assert!(stderr.contains("unknown ai 'shark'"));

    // eval does not read the config
    let (code, _, _) = run(&["headsup", "eval", "As", "Ks", "Qs", "Js", "Ts"], "");
    assert_eq!(code, 0);
}

#[test]
fn eval_names_the_best_hand() {
    let (code, stdout, _) = run(
        &["headsup", "eval", "Kc", "Kd", "4h", "4s", "Ac", "2d", "7s"],
        "",
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Best hand: Two Pair (Kings and Fours)"));
    assert!(stdout.contains("Score: [2, 13, 4, 14]"));
}

#[test]
fn eval_rejects_too_few_cards() {
    let (code, _, stderr) = run(&["headsup", "eval", "Kc", "Kd", "4h"], "");
    assert_eq!(code, 2);
    assert!(stderr.contains("Invalid card count"));
}

#[test]
#[serial]
fn equity_with_seed_is_reproducible() {
    let args = [
        "headsup", "equity", "--hole", "Ah Kh", "--board", "Qh 7c 2h", "--samples", "400",
        "--seed", "3",
    ];
    let (code_a, a, _) = run(&args, "");
    let (code_b, b, _) = run(&args, "");
    assert_eq!((code_a, code_b), (0, 0));
    assert_eq!(a, b);
    assert!(a.contains("Samples: 400 (seed 3)"));
}

#[test]
#[serial]
fn equity_exact_split_on_board_royal() {
    let (code, stdout, _) = run(
        &[
            "headsup", "equity", "--hole", "2c 3d", "--board", "Ah Kh Qh Jh Th", "--villain",
            "4c 5d",
        ],
        "",
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Result: split (0.5)"));
}

#[test]
fn deal_is_deterministic() {
    let (_, a, _) = run(&["headsup", "deal", "--seed", "99"], "");
    let (_, b, _) = run(&["headsup", "deal", "--seed", "99"], "");
    assert_eq!(a, b);
    assert!(a.contains("Board: ["));
}

#[test]
#[serial]
fn sim_reports_conserved_chips() {
    let (code, stdout, stderr) = run(
        &["headsup", "sim", "--hands", "12", "--seed", "8", "--chips", "200"],
        "",
    );
    assert_eq!(code, 0, "{stderr}");
    assert!(stdout.contains("Chip total conserved: 400"));
}

#[test]
fn sim_rejects_zero_hands_at_parse_time() {
    let (code, _, stderr) = run(&["headsup", "sim", "--hands", "0"], "");
    assert_eq!(code, 2);
    assert!(stderr.contains("Usage: headsup"));
}
