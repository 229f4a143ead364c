// ============================================================================
// TransDesk - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 通用
    ("common.cancelled", "已取消"),
    // 校验
    ("validation.english_required", "请输入英文内容"),
    (
        "validation.key_rule",
        "键 `{}` 无效：必须以字母或下划线开头，只能包含字母、数字和下划线",
    ),
    ("validation.tag_required", "请输入标签名"),
    (
        "validation.tag_rule",
        "标签 `{}` 无效：只能包含字母、数字、下划线和汉字",
    ),
    ("validation.tag_exists", "标签 `{}` 已存在"),
    ("validation.unknown_tag", "标签 `{}` 不存在"),
    ("validation.database_required", "请输入数据库名"),
    (
        "validation.database_rule",
        "数据库名 `{}` 无效：必须以字母或下划线开头，只能包含字母、数字和下划线",
    ),
    ("validation.unknown_database", "数据库 `{}` 不存在"),
    ("validation.unknown_language", "未知语言 `{}`"),
    ("validation.source_locked", "英文是源语言，不能修改"),
    ("validation.invalid_id", "无效的条目 ID {}"),
    // 提示
    ("notice.add_success", "添加成功"),
    ("notice.update_success", "更新成功"),
    ("notice.delete_success", "删除成功"),
    ("notice.delete_failed", "删除失败"),
    ("notice.tag_created", "标签创建成功"),
    ("notice.tag_deleted", "标签删除成功"),
    ("notice.language_toggled", "语言状态已更新"),
    ("notice.language_removed", "语言已移除"),
    ("notice.database_created", "数据库创建成功"),
    ("notice.database_switched", "数据库切换成功"),
    ("notice.operation_failed", "操作失败"),
    ("notice.toggle_language_failed", "切换语言状态失败"),
    ("notice.remove_language_failed", "移除语言失败"),
    ("notice.create_database_failed", "创建数据库失败"),
    ("notice.switch_database_failed", "切换数据库失败"),
    ("notice.get_translations_failed", "获取翻译数据失败"),
    ("notice.get_languages_failed", "获取语言列表失败"),
    ("notice.get_tags_failed", "获取标签列表失败"),
    ("notice.get_logs_failed", "获取操作日志失败"),
    ("notice.get_databases_failed", "获取数据库列表失败"),
    ("notice.search_failed", "搜索失败"),
    // 导出
    ("export.single_success", "已导出{}到 {}"),
    (
        "export.all_success",
        "已导出 {} 种语言：共 {}/{} 条，其中 {} 条带键",
    ),
    ("export.partial_failed", "以下语言导出失败：{}"),
    ("export.failed", "导出失败"),
    ("export.nothing", "没有可导出的激活语言"),
    ("export.preparing", "正在加载语言..."),
    ("export.running", "正在导出..."),
    ("export.progress", "正在导出... {}/{}"),
    // 列表
    ("list.loading", "正在加载翻译..."),
    ("list.loading_more", "正在加载更多..."),
    ("list.empty", "暂无翻译数据"),
    ("list.footer", "已显示 {} 条，共 {} 条"),
    ("list.search_footer", "共 {} 条匹配 \"{}\""),
    ("list.has_more", "还有更多条目，使用 --pages 或 --all 加载"),
    ("search.loading", "正在搜索..."),
    // 条目
    ("entry.saving", "正在保存..."),
    ("entry.deleting", "正在删除..."),
    ("entry.confirm_delete", "确认删除条目 #{}？[y/N]"),
    // 标签
    ("tag.loading", "正在加载标签..."),
    ("tag.saving", "正在创建标签..."),
    ("tag.deleting", "正在删除标签..."),
    (
        "tag.confirm_delete",
        "确认删除标签 `{}`？有 {} 条翻译使用该标签，删除后将失去该标签。[y/N]",
    ),
    // 语言
    ("lang.loading", "正在加载语言..."),
    ("lang.saving", "正在更新语言..."),
    ("lang.confirm_remove", "确认移除语言{}？[y/N]"),
    // 数据库
    ("db.loading", "正在加载数据库..."),
    ("db.saving", "正在创建数据库..."),
    ("db.switching", "正在切换数据库..."),
    // 日志
    ("logs.loading", "正在加载操作日志..."),
    ("log.add", "新增"),
    ("log.update", "更新"),
    ("log.delete", "删除"),
    ("log.add_tag", "新增标签"),
    ("log.delete_tag", "删除标签"),
    // 汇总
    ("summary.tags_title", "标签（{} 个）"),
    ("summary.no_tags", "暂无标签"),
    ("summary.languages_title", "语言（{} 个已激活）"),
    ("summary.source_language", "源语言"),
    ("summary.databases_title", "数据库（{} 个）"),
    ("summary.current", "当前"),
    ("summary.logs_title", "操作日志"),
    ("summary.no_logs", "暂无操作日志"),
    ("summary.log_count", "{} 条"),
    ("summary.export_title", "导出"),
    ("summary.export_stats", "导出 {}/{} 条，{} 条带键"),
    (
        "summary.export_totals",
        "{}/{} 种语言导出成功，共 {} 条，{} 条带键",
    ),
    // 界面语言
    ("locale.current", "界面语言：{}"),
    ("locale.saved", "界面语言已设置为 {}"),
    ("locale.unsupported", "不支持的界面语言 `{}`（可选 en 或 zh）"),
    ("locale.state_unreadable", "忽略无法读取的界面语言文件 {}：{}"),
    // 初始化
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --force 覆盖"),
    ("init.config_created", "配置文件已创建: {}"),
    ("init.next_steps", "请修改 server.base_url 指向翻译服务"),
    ("init.create_failed", "创建配置文件失败: {}"),
];
