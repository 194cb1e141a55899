mod api_context;
