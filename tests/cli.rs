use std::io::Write;
use std::process::{Command, Output, Stdio};
use std::thread;

use statuspage_models::config::CONFIG;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_statuspage-models"));
    // 错误日志要按默认过滤指令输出
    cmd.env_remove("RUST_LOG");
    cmd
}

/// 通过标准输入喂数据；子进程提前退出时写入失败是预期的
fn run_with_stdin(args: &[&str], input: Vec<u8>) -> Output {
    let mut child = bin()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    let mut stdin = child.stdin.take().unwrap();
    let writer = thread::spawn(move || {
        let _ = stdin.write_all(&input);
    });
    let output = child.wait_with_output().unwrap();
    writer.join().unwrap();
    output
}

fn oversized() -> Vec<u8> {
    vec![b' '; CONFIG.max_payload_bytes as usize + 1]
}

#[test]
fn oversized_stdin_is_rejected() {
    let output = run_with_stdin(&["component"], oversized());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exceeds limit"), "{stderr}");
}

#[test]
fn oversized_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&oversized()).unwrap();
    file.flush().unwrap();

    let output = bin()
        .arg("component")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exceeds limit"), "{stderr}");
}

#[test]
fn valid_file_is_normalized() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"component":{"description":null,"extra":1}}"#)
        .unwrap();
    file.flush().unwrap();

    let output = bin()
        .args(["patch-component", "--compact"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "{\"component\":{\"description\":null}}\n"
    );
}

#[test]
fn unknown_token_on_stdin_fails() {
    let output = run_with_stdin(&["component", "-"], br#"{"status":"bogus"}"#.to_vec());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown enum token `bogus`"), "{stderr}");
}
