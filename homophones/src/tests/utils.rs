//! テスト用ユーティリティ

use std::fs;
use std::path::Path;

use hashbrown::HashMap;

use crate::analyzer::{Analyzer, Morpheme};

/// 行ごとに決められたトークン列を返す解析器
///
/// 登録されていない行は空のトークン列になります。
#[derive(Default)]
pub(crate) struct ScriptedAnalyzer {
    script: HashMap<String, Vec<Morpheme>>,
    pub(crate) num_calls: usize,
}

impl ScriptedAnalyzer {
    /// `(表層形, 品詞, 読み)`の列を1行分として登録します。
    pub(crate) fn line(mut self, line: &str, tokens: &[(&str, &str, Option<&str>)]) -> Self {
        let morphemes = tokens
            .iter()
            .map(|&(surface, pos, reading)| Morpheme::new(surface, pos, reading))
            .collect();
        self.script.insert(line.to_string(), morphemes);
        self
    }
}

impl Analyzer for ScriptedAnalyzer {
    fn analyze(&mut self, line: &str) -> Vec<Morpheme> {
        self.num_calls += 1;
        self.script.get(line).cloned().unwrap_or_default()
    }
}

/// ディレクトリ以下にファイルを作成します。親ディレクトリも作成されます。
pub(crate) fn write_file(root: &Path, relative: &str, contents: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// 出力ディレクトリ内のファイルを文字列として読み込みます。
pub(crate) fn read_output(dir: &Path, file_name: &str) -> String {
    fs::read_to_string(dir.join(file_name)).unwrap()
}
