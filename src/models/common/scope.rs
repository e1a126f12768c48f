/// 行级可见范围
///
/// 管理员与教职工看到全部记录；学生只看到挂在自己学生档案下的记录。
/// `Student(None)` 表示账号没有关联的学生档案，此时什么也看不到。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowScope {
    All,
    Student(Option<i64>),
}

impl RowScope {
    /// 判断属于 `student_id` 的记录是否可见
    pub fn permits(&self, student_id: Option<i64>) -> bool {
        match self {
            RowScope::All => true,
            RowScope::Student(Some(own)) => student_id == Some(*own),
            RowScope::Student(None) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permits() {
        assert!(RowScope::All.permits(Some(3)));
        assert!(RowScope::All.permits(None));
        assert!(RowScope::Student(Some(3)).permits(Some(3)));
        assert!(!RowScope::Student(Some(3)).permits(Some(4)));
        assert!(!RowScope::Student(Some(3)).permits(None));
        assert!(!RowScope::Student(None).permits(Some(3)));
    }
}
