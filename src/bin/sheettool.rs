// Grade or scan an answer-sheet photo from the command line.
//
// Usage:
//   sheettool <image-path>              scan only, print detected answers
//   sheettool <image-path> <key>        grade; key is letters ("ABCDA")
//                                       or comma-separated indices ("0,1,2,3,0")
use omr_scan::{GradeError, KeyEntry};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (path, key_arg) = match args.as_slice() {
        [path] => (path.clone(), None),
        [path, key] => (path.clone(), Some(key.clone())),
        _ => {
            eprintln!("usage: sheettool <image-path> [key]");
            return ExitCode::FAILURE;
        }
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("failed to read {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let output = match key_arg {
        Some(key_arg) => {
            let key = match parse_key(&key_arg) {
                Some(key) => key,
                None => {
                    eprintln!("unparseable key: {}", key_arg);
                    return ExitCode::FAILURE;
                }
            };
            omr_scan::grade(&bytes, &key).map(|r| serde_json::to_string_pretty(&r))
        }
        None => omr_scan::scan(&bytes).map(|r| serde_json::to_string_pretty(&r)),
    };

    match output {
        Ok(Ok(json)) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Ok(Err(e)) => {
            eprintln!("failed to serialize result: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &GradeError) {
    eprintln!("error: {}", err);
    eprintln!("hint: {}", err.hint());
}

/// Accept "ABCDA" or "0,1,2,3,0" (mixed "0,B,2" works too).
fn parse_key(arg: &str) -> Option<Vec<KeyEntry>> {
    if arg.is_empty() {
        return None;
    }
    if arg.contains(',') {
        arg.split(',')
            .map(|token| {
                let token = token.trim();
                if let Ok(index) = token.parse::<u8>() {
                    Some(KeyEntry::Index(index))
                } else if token.len() == 1 && token.chars().all(|c| c.is_ascii_alphabetic()) {
                    Some(KeyEntry::Letter(token.to_string()))
                } else {
                    None
                }
            })
            .collect()
    } else if arg.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(arg.chars().map(KeyEntry::from).collect())
    } else {
        None
    }
}
