#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === SHIFT MESSAGES ===
    ShiftRecorded(String, String), // date, label
    ShiftCleared(String),          // date
    TodayShift(String, String),    // emoji, label
    NoShiftToday,
    ShiftsLoadFailed(String), // error
    ShiftsSaveFailed(String), // error
    ShiftKindPrompt(String),  // date

    // === CALENDAR MESSAGES ===
    WeekHeader(String), // month and year
    WeekRange(String, String), // first day, last day

    // === SUMMARY MESSAGES ===
    SummaryHeader(String), // period label
    NoShiftsRecorded,
    WorkLifeBalance(i64),
    WorkLifeBalanceHint,
    ConsecutiveWorkDays(usize),
    ShiftCountsHeader,

    // === EMPATHY MESSAGES ===
    EmpathyAfternoonToMorning { period_text: String, count: usize },
    EmpathyFrequentNights,
    EmpathyLongStreak(usize),
    EmpathyLowBalance(i64),
    EmpathyThanks,

    // === BADGE MESSAGES ===
    BadgeNoShifts,
    BadgeJustStarted,
    BadgeGatheringData,
    BadgeUrgentRest,
    BadgeMoreRest,
    BadgeTakeBreakSoon,
    BadgeLongStreak,
    BadgeNearStreakLimit,
    BadgeTooManyAfternoonToMorning,
    BadgeAfternoonToMorning,
    BadgeTooManyNights,
    BadgeManyNights,
    BadgeBalanceExcellent,
    BadgeBalanceGood,
    BadgeBalanceNormal,

    // === LEDGER MESSAGES ===
    TransactionAdded(i64),
    TransactionUpdated(i64),
    TransactionDeleted(i64),
    TransactionNotFound(i64),
    TransactionsEmpty,
    TransactionsLoadFailed(String), // error
    TransactionsHeader,
    ConfirmDeleteTransaction(i64),
    LedgerReportHeader(u32), // days
    CategoryBreakdownHeader(String), // income / expense
    DailyTotal(String),
    WeeklyTotal(String),
    SuggestionsHeader(String), // income / expense
    PromptTransactionType,
    PromptAmount,
    PromptDescription,
    PromptCategory,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigReadFailed(String), // error
    ConfigModuleSummary,
    ConfigModuleLedger,
    PromptSelectModules,
    PromptDefaultPeriod,
    PromptCurrencySymbol,
    PromptReportDays,

    // === EXPORT MESSAGES ===
    ExportingData(String, String), // data, format
    ExportCompleted(String),       // path

    // === GENERAL MESSAGES ===
    InvalidDate(String),
    OperationCancelled,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseUpToDate,
}
