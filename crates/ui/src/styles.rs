//! CSS styles for the UI

/// Complete offline CSS styles
pub const CUSTOM_STYLES: &str = r#"
    /* Reset & Base */
    * {
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }

    html, body {
        font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        background: linear-gradient(135deg, #0f2027 0%, #203a43 100%);
        color: #eee;
        height: 100%;
    }

    /* Main Container */
    .main-container {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
    }

    /* Title Bar */
    .title-bar {
        padding: 14px 20px;
        background: rgba(15, 23, 42, 0.8);
    }
    .title-text {
        font-size: 16px;
        font-weight: 600;
        color: #fbbf24;
    }

    /* Tab Bar */
    .tab-bar {
        display: flex;
        gap: 4px;
        padding: 0 20px;
        background: rgba(15, 23, 42, 0.6);
        border-bottom: 1px solid rgba(251, 191, 36, 0.1);
    }
    .tab-item {
        padding: 12px 24px;
        color: #9ca3af;
        text-decoration: none;
        font-size: 14px;
        border-bottom: 2px solid transparent;
        transition: all 0.15s;
    }
    .tab-item:hover {
        color: #fbbf24;
        background: rgba(251, 191, 36, 0.1);
    }
    .tab-item.tab-active {
        color: #fbbf24;
        border-bottom-color: #fbbf24;
    }

    /* Pages */
    .content-area {
        flex: 1;
        padding: 20px;
    }
    .page-title {
        font-size: 20px;
        font-weight: 500;
    }
"#;
