//! 列表查询的公共部分：搜索、排序、行级范围与分页

use sea_orm::sea_query::{LikeExpr, SelectStatement};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, Select,
};

use crate::entity::{courses, students};

use crate::errors::{EduSystemError, Result};
use crate::models::{PaginatedResponse, PaginationInfo, PaginationQuery, RowScope};
use crate::utils::escape_like_pattern;

/// 子串匹配模式，用户输入中的通配符按字面量处理
pub(super) fn like_term(term: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like_pattern(term))).escape('\\')
}

/// 姓名匹配的学生 ID 子查询
pub(super) fn students_named(term: &str) -> SelectStatement {
    students::Entity::find()
        .select_only()
        .column(students::Column::Id)
        .filter(students::Column::FullName.like(like_term(term)))
        .into_query()
}

/// 标题匹配的课程 ID 子查询
pub(super) fn courses_titled(term: &str) -> SelectStatement {
    courses::Entity::find()
        .select_only()
        .column(courses::Column::Id)
        .filter(courses::Column::Title.like(like_term(term)))
        .into_query()
}

/// 按请求的排序字段排序；没有可识别的字段时使用默认排序
///
/// 未知字段直接忽略。
pub(super) fn apply_ordering<E: EntityTrait>(
    mut select: Select<E>,
    requested: &[(&str, Order)],
    allowed: &[(&str, E::Column)],
    default: &[(E::Column, Order)],
) -> Select<E> {
    let mut applied = false;
    for (name, order) in requested {
        if let Some((_, column)) = allowed.iter().find(|(field, _)| field == name) {
            select = select.order_by(*column, order.clone());
            applied = true;
        }
    }
    if !applied {
        for (column, order) in default {
            select = select.order_by(*column, order.clone());
        }
    }
    select
}

/// 学生角色只保留 `column` 等于自己学生档案 ID 的行
pub(super) fn apply_scope<E: EntityTrait>(
    select: Select<E>,
    column: E::Column,
    scope: RowScope,
) -> Select<E> {
    match scope {
        RowScope::All => select,
        // 没有学生档案时为空集
        RowScope::Student(student_id) => select.filter(column.is_in(student_id)),
    }
}

/// 分页查询
pub(super) async fn fetch_page<E>(
    db: &DatabaseConnection,
    select: Select<E>,
    pagination: &PaginationQuery,
    what: &str,
) -> Result<PaginatedResponse<E::Model>>
where
    E: EntityTrait,
    E::Model: Send + Sync + 'static,
{
    let (page, size) = pagination.normalized();

    let paginator = select.paginate(db, size);
    let total = paginator
        .num_items()
        .await
        .map_err(|e| EduSystemError::database_operation(format!("查询{what}总数失败: {e}")))?;

    let pages = paginator
        .num_pages()
        .await
        .map_err(|e| EduSystemError::database_operation(format!("查询{what}页数失败: {e}")))?;

    // 超出末页直接返回空列表
    let items = if page > pages {
        Vec::new()
    } else {
        paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询{what}列表失败: {e}")))?
    };

    Ok(PaginatedResponse {
        items,
        pagination: PaginationInfo {
            page: page as i64,
            page_size: size as i64,
            total: total as i64,
            total_pages: pages as i64,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::departments::{Column, Entity as Departments};
    use sea_orm::DbBackend;

    const ALLOWED: &[(&str, Column)] = &[("name", Column::Name), ("code", Column::Code)];

    fn sql(select: Select<Departments>) -> String {
        select.build(DbBackend::Sqlite).to_string()
    }

    #[test]
    fn test_requested_ordering_applied() {
        let select = apply_ordering(
            Departments::find(),
            &[("code", Order::Desc), ("name", Order::Asc)],
            ALLOWED,
            &[(Column::Id, Order::Asc)],
        );
        let sql = sql(select);
        assert!(sql.contains(r#"ORDER BY "departments"."code" DESC, "departments"."name" ASC"#));
    }

    #[test]
    fn test_unknown_fields_fall_back_to_default() {
        let select = apply_ordering(
            Departments::find(),
            &[("password", Order::Asc)],
            ALLOWED,
            &[(Column::Id, Order::Asc)],
        );
        let sql = sql(select);
        assert!(sql.contains(r#"ORDER BY "departments"."id" ASC"#));
        assert!(!sql.contains("password"));
    }

    #[test]
    fn test_scope_all_adds_no_filter() {
        let select = apply_scope(Departments::find(), Column::Id, RowScope::All);
        assert!(!sql(select).contains("WHERE"));
    }

    #[test]
    fn test_student_scope_filters() {
        let select = apply_scope(Departments::find(), Column::Id, RowScope::Student(Some(5)));
        assert!(sql(select).contains(r#""departments"."id" IN (5)"#));
    }
}
