use guessing::pick_target;
use rand::{rngs::SmallRng, SeedableRng};
use std::io::Write;
use std::process::{Command, Stdio};

fn first_target(seed: u64) -> u8 {
    pick_target(&mut SmallRng::seed_from_u64(seed))
}

fn run_game(args: &[&str], lang_env: Option<&str>, stdin: &str) -> String {
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--quiet", "--bin", "guessing", "--"])
        .args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env_remove("GUESSING_LANG")
        .env_remove("GUESSING_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(lang) = lang_env {
        cmd.env("GUESSING_LANG", lang);
    }

    let mut child = cmd.spawn().expect("failed to start guessing binary");
    child
        .stdin
        .take()
        .expect("stdin not piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    let output = child.wait_with_output().expect("failed to wait for guessing binary");
    assert!(output.status.success());
    String::from_utf8(output.stdout).expect("non utf8 output")
}

#[test]
fn seed_and_lang_flags() {
    let target = first_target(7);
    let stdout = run_game(&["--seed", "7", "--lang", "en"], None, &format!("{}\nn\n", target));
    assert!(stdout.contains("Welcome to the number guessing game!"));
    assert!(stdout.contains("Correct! You got it in 1 attempts."));
    assert!(stdout.contains("Thanks for playing! Bye!"));
}

#[test]
fn lang_from_environment() {
    let target = first_target(21);
    let stdout = run_game(&["--seed", "21"], Some("en"), &format!("{}\nno\n", target));
    assert!(stdout.contains("Correct! You got it in 1 attempts."));
}

#[test]
fn defaults_to_chinese_and_exits_on_closed_input() {
    let target = first_target(3);
    let stdout = run_game(&["--seed", "3"], None, &format!("{}\n", target));
    assert!(stdout.contains("欢迎来到猜数字游戏！"));
    assert!(stdout.contains("恭喜你！猜对了！你总共猜了 1 次。"));
    assert!(stdout.contains("读取输入失败，默认退出游戏。"));
}
