use super::Reply;

pub fn execute() -> Reply {
    Reply::Message(
        "📖 Commands\n\
         \n\
         Filters\n\
         \x20 set <type|start|end|search> <value>  Edit a filter input (dates as YYYY-MM-DD)\n\
         \x20 unset <type|start|end|search>        Reset one input\n\
         \x20 apply                                Fetch transactions with the current filters\n\
         \x20 clear                                Reset all filters and fetch again\n\
         \x20 types                                List transaction types\n\
         \n\
         Details\n\
         \x20 view <id>                            Show a transaction from the table\n\
         \x20 close                                Hide the detail view\n\
         \n\
         General\n\
         \x20 show                                 Redraw the dashboard\n\
         \x20 reload                               Reload transactions, summary and charts\n\
         \x20 help                                 Show this message\n\
         \x20 quit                                 Exit"
            .to_string(),
    )
}
