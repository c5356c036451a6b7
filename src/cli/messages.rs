//! Fixed prompt catalogs.

use crate::core::{InputError, MAX_TARGET, MIN_TARGET};

/// Language of the console text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Lang {
    #[default]
    Zh,
    En,
}

impl Lang {
    pub fn title(self) -> &'static str {
        match self {
            Lang::Zh => "🎯 猜数字游戏",
            Lang::En => "🎯 Number Guessing Game",
        }
    }

    pub fn welcome(self) -> &'static str {
        match self {
            Lang::Zh => "欢迎来到猜数字游戏！",
            Lang::En => "Welcome to the number guessing game!",
        }
    }

    pub fn intro(self) -> String {
        match self {
            Lang::Zh => format!(
                "我已经想好了一个 {}-{} 之间的数字，请开始猜测：",
                MIN_TARGET, MAX_TARGET
            ),
            Lang::En => format!(
                "I'm thinking of a number between {} and {}. Start guessing:",
                MIN_TARGET, MAX_TARGET
            ),
        }
    }

    pub fn guess_prompt(self) -> &'static str {
        match self {
            Lang::Zh => "请输入你的猜测：",
            Lang::En => "Enter your guess: ",
        }
    }

    pub fn too_high(self) -> &'static str {
        match self {
            Lang::Zh => "太大了！请再试一次。",
            Lang::En => "Too high! Try again.",
        }
    }

    pub fn too_low(self) -> &'static str {
        match self {
            Lang::Zh => "太小了！请再试一次。",
            Lang::En => "Too low! Try again.",
        }
    }

    pub fn correct(self, attempts: u32) -> String {
        match self {
            Lang::Zh => format!("恭喜你！猜对了！你总共猜了 {} 次。", attempts),
            Lang::En => format!("Correct! You got it in {} attempts.", attempts),
        }
    }

    /// Localized form of an input error, followed by the retry hint.
    pub fn input_error(self, err: &InputError) -> String {
        let reason = match (self, err) {
            (Lang::Zh, InputError::ReadFailure) => "读取输入失败".to_string(),
            (Lang::Zh, InputError::EmptyInput) => "输入不能为空".to_string(),
            (Lang::Zh, InputError::NotANumber) => "请输入一个有效的数字".to_string(),
            (Lang::Zh, InputError::OutOfRange(_)) => {
                format!("数字必须在 {}-{} 之间", MIN_TARGET, MAX_TARGET)
            }
            (Lang::En, e) => e.to_string(),
        };
        match self {
            Lang::Zh => format!("输入错误：{}，请重新输入。", reason),
            Lang::En => format!("Invalid input: {}. Please try again.", reason),
        }
    }

    pub fn round_abandoned(self) -> &'static str {
        match self {
            Lang::Zh => "输入已结束，本局游戏中止。",
            Lang::En => "Input closed, abandoning this round.",
        }
    }

    pub fn replay_prompt(self) -> &'static str {
        match self {
            Lang::Zh => "是否继续游戏？(y/n)：",
            Lang::En => "Play again? (y/n): ",
        }
    }

    pub fn replay_hint(self) -> &'static str {
        match self {
            Lang::Zh => "请输入 y(是) 或 n(否)。",
            Lang::En => "Please answer y (yes) or n (no).",
        }
    }

    pub fn replay_read_failure(self) -> &'static str {
        match self {
            Lang::Zh => "读取输入失败，默认退出游戏。",
            Lang::En => "Failed to read input, exiting.",
        }
    }

    pub fn new_game(self) -> &'static str {
        match self {
            Lang::Zh => "开始新游戏！",
            Lang::En => "Starting a new game!",
        }
    }

    pub fn farewell(self) -> &'static str {
        match self {
            Lang::Zh => "感谢游戏！再见！👋",
            Lang::En => "Thanks for playing! Bye! 👋",
        }
    }
}
