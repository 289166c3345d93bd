/*
 * @Description  : 快照文件的发现与排序
 *
 * epoch序号由文件的处理顺序决定，而目录枚举顺序由平台决定、并不可靠，
 * 因此必须先按显式的排序键排序；无法唯一排序时报错而不是随意指定顺序。
 */

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::error::DecodeError;
use crate::config::{EpochOrder, LoadOptions};

/// 列出`dir`下扩展名匹配的快照文件，并按`options.order`排序、按`options.max_epochs`截断。
///
/// 目录不存在/不可读或没有匹配的文件都不算错误，只会返回空列表（并告警）；
/// 排序有歧义时返回`DecodeError::AmbiguousOrder`。
pub fn discover_epoch_files<P: AsRef<Path>>(
    dir: P,
    options: &LoadOptions,
) -> Result<Vec<PathBuf>, DecodeError> {
    let dir = dir.as_ref();
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("无法读取快照目录 {}: {e}", dir.display());
            return Ok(Vec::new());
        }
    };

    let files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_extension(path, &options.extension))
        .collect();
    if files.is_empty() {
        warn!(
            "快照目录 {} 下没有 .{} 文件",
            dir.display(),
            options.extension
        );
        return Ok(files);
    }

    let mut files = order_epoch_files(files, options.order)?;
    if let Some(max_epochs) = options.max_epochs {
        files.truncate(max_epochs);
    }
    info!("在 {} 中发现 {} 个快照文件", dir.display(), files.len());
    Ok(files)
}

/// 按排序键给文件排序，排序结果即epoch序号
pub fn order_epoch_files(
    files: Vec<PathBuf>,
    order: EpochOrder,
) -> Result<Vec<PathBuf>, DecodeError> {
    match order {
        EpochOrder::FileName => {
            let mut keyed: BTreeMap<_, PathBuf> = BTreeMap::new();
            for path in files {
                let key = path.file_name().map(|name| name.to_os_string());
                let Some(key) = key else {
                    return Err(DecodeError::AmbiguousOrder {
                        path,
                        reason: "路径没有文件名".to_string(),
                    });
                };
                if let Some(previous) = keyed.get(&key) {
                    return Err(duplicate_key(path, previous, &key.to_string_lossy()));
                }
                keyed.insert(key, path);
            }
            Ok(keyed.into_values().collect())
        }
        EpochOrder::EpochNumber => {
            let mut keyed: BTreeMap<_, PathBuf> = BTreeMap::new();
            for path in files {
                let Some(number) = epoch_number(&path) else {
                    return Err(DecodeError::AmbiguousOrder {
                        path,
                        reason: "文件名中没有epoch数字".to_string(),
                    });
                };
                if let Some(previous) = keyed.get(&number) {
                    return Err(duplicate_key(path, previous, &number.to_string()));
                }
                keyed.insert(number, path);
            }
            Ok(keyed.into_values().collect())
        }
    }
}

/// 取文件名（不含扩展名）中最后一段连续数字，如`ckpt_epoch_10.json` → 10
pub fn epoch_number(path: &Path) -> Option<u64> {
    let stem = path.file_stem()?.to_str()?;
    let end = stem.rfind(|c: char| c.is_ascii_digit())? + 1;
    let start = stem[..end]
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    stem[start..end].parse().ok()
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

fn duplicate_key(path: PathBuf, previous: &Path, key: &str) -> DecodeError {
    let reason = format!("与 {} 的排序键`{key}`重复", previous.display());
    DecodeError::AmbiguousOrder { path, reason }
}
