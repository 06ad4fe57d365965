//! エラー型の定義
//!
//! このモジュールは、同音異字抽出ライブラリで使用されるすべてのエラー型を定義します。
//! 文字コードの不正や解析器が読みを返さないトークンはエラーにはならず、
//! ここで扱うのはファイルシステムと引数に関するものだけです。

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// 同音異字抽出専用のResult型
///
/// エラー型としてデフォルトで[`HomophoneError`]を使用します。
pub type Result<T, E = HomophoneError> = std::result::Result<T, E>;

/// 同音異字抽出のエラー型
#[derive(Debug, thiserror::Error)]
pub enum HomophoneError {
    /// 無効な引数エラー
    ///
    /// [`InvalidArgumentError`]のエラーバリアント。
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// 入力ディレクトリが存在しない、またはディレクトリではない
    #[error("The path '{0}' is not a directory.")]
    NotADirectory(PathBuf),

    /// ディレクトリ走査中のエラー
    ///
    /// [`walkdir::Error`]のエラーバリアント。
    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),

    /// I/Oエラー
    ///
    /// [`std::io::Error`]のエラーバリアント。
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HomophoneError {
    /// 無効な引数エラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - 引数の名前
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }
}

/// 引数が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// 引数の名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}
