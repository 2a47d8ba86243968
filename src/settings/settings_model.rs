use crate::views::ColumnConfig;

pub const COLUMNS_KEY: &str = "tenderColumns";
pub const DASHBOARD_BLOCKS_KEY: &str = "dashboardBlocks";

/// Column set shown when nothing has been persisted yet
pub fn default_columns() -> Vec<ColumnConfig> {
    [
        ("stage", "Этап", true),
        ("subject", "Предмет закупки", true),
        ("purchaseNumber", "Номер закупки", true),
        ("platformName", "Площадка", false),
        ("law", "Закон", false),
        ("customerName", "Заказчик", true),
        ("customerRegion", "Регион", false),
        ("endDate", "Окончание подачи", true),
        ("startPrice", "Начальная цена", true),
        ("winnerName", "Победитель", false),
        ("winnerPrice", "Цена победителя", false),
        ("totalAmount", "Сумма контракта", true),
        ("contractSecurity", "Обеспечение", false),
        ("platformFee", "Комиссия площадки", false),
    ]
    .iter()
    .map(|(id, label, visible)| ColumnConfig {
        id: id.to_string(),
        label: label.to_string(),
        visible: *visible,
    })
    .collect()
}
