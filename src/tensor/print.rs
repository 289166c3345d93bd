/*
 * @Description  : 张量的文本展示，主要用于在命令行中查看输出层激活值这类一阶/二阶张量
 */

use std::fmt;

use super::Tensor;

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let shape = self.shape();
        match shape.len() {
            1 => write_row(f, self.data.iter())?,
            2 => {
                write!(f, "[")?;
                for (i, row) in self.data.outer_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", \n ")?;
                    }
                    write_row(f, row.iter())?;
                }
                write!(f, "]")?;
            }
            _ => {
                return writeln!(
                    f,
                    "<对于阶数大于二（rank>2）的张量（形状：{shape:?}）无法展示具体数据>"
                );
            }
        }
        writeln!(f, "\n形状: {shape:?}")
    }
}

fn write_row<'a>(f: &mut fmt::Formatter, values: impl Iterator<Item = &'a f32>) -> fmt::Result {
    write!(f, "[")?;
    for (i, value) in values.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{value:8.4}")?;
    }
    write!(f, "]")
}
