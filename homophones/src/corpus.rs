//! コーパスの走査と行単位の読み込み
//!
//! 入力ディレクトリ以下の通常ファイルは拡張子に関係なくすべて対象になります。
//! 不正なバイト列はエラーにせず、置換文字（U+FFFD）にして読み進めます。

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::{HomophoneError, Result};

/// ディレクトリ以下のすべての通常ファイルを再帰的に列挙します。
///
/// 実行ごとに同じ順序で処理するため、結果はパスでソートされます。
///
/// # 引数
///
/// * `root` - 走査するディレクトリ
///
/// # エラー
///
/// `root`が存在しない、ディレクトリではない、または走査中にI/Oエラーが
/// 発生した場合にエラーを返します。
pub fn collect_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(HomophoneError::NotADirectory(root.to_path_buf()));
    }

    let mut paths = vec![];
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            paths.push(entry.into_path());
        }
    }
    paths.sort();
    Ok(paths)
}

/// ファイルを1行ずつ読み込むイテレータを作成します。
///
/// 各行はUTF-8としてデコードされ（不正なバイト列はU+FFFDに置換）、
/// 前後の空白が取り除かれます。ファイルはイテレータが破棄されるときに閉じられます。
/// 呼び出すたびに先頭から読み直します。
///
/// # エラー
///
/// ファイルを開けない場合にエラーを返します。
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Lines<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(Lines::new(BufReader::new(file)))
}

/// 空白を取り除いた行を返すイテレータ
///
/// [`read_lines`]によって作成されます。
pub struct Lines<R> {
    rdr: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Lines<R> {
    /// 任意のリーダーから行イテレータを作成します。
    pub fn new(rdr: R) -> Self {
        Self { rdr, buf: vec![] }
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.rdr.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => Some(Ok(String::from_utf8_lossy(&self.buf).trim().to_string())),
            Err(e) => Some(Err(e)),
        }
    }
}
