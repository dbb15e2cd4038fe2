//! The canonical diagram catalog.
//!
//! Four declaration routines, one per architectural viewpoint of the AWS WAF
//! log-analyzer product, each returning a validated [`Diagram`]. All labels
//! and groupings are fixed; the routines take no input and share no state
//! beyond the common vocabulary of service names.

use wafviz_core::{
    GraphError,
    icon::Icon,
    semantic::{
        ArrowDirection, Diagram, DiagramBuilder, EdgeColor, EdgeStyle, LineStyle, RankDirection,
    },
};

/// Returns the four catalog diagrams in canonical render order.
pub fn all() -> Result<Vec<Diagram>, GraphError> {
    Ok(vec![
        main_architecture()?,
        data_flow()?,
        security_architecture()?,
        deployment_architecture()?,
    ])
}

/// The complete architecture view: actors, frontend delivery chain, demo
/// application, WAF protection layer, log pipeline, analysis backend, and
/// rule management.
pub fn main_architecture() -> Result<Diagram, GraphError> {
    let mut d = DiagramBuilder::new(
        "AWS WAF Log Analyzer Architecture",
        "waf-analyzer-architecture",
        RankDirection::TopBottom,
    );

    // Users
    let users = d.node("users", "Security Teams", Icon::Users)?;
    let attackers = d.node("attackers", "Attackers/Bots", Icon::Users)?;

    let frontend = d.cluster("frontend", "Frontend (WAF Analyzer Dashboard)");
    let route53 = d.node_in(frontend, "route53", "DNS", Icon::Route53)?;
    let cloudfront = d.node_in(frontend, "cloudfront", "CloudFront", Icon::CloudFront)?;
    let s3_frontend = d.node_in(frontend, "s3_frontend", "React App\n(S3)", Icon::S3)?;
    d.chain(&[route53, cloudfront, s3_frontend])?;

    let demo = d.cluster("demo", "Demo Application");
    let demo_api = d.node_in(demo, "demo_api", "Demo API\nGateway", Icon::ApiGateway)?;
    let demo_lambda = d.node_in(demo, "demo_lambda", "Demo Website\n& API", Icon::Lambda)?;
    let demo_dynamodb = d.node_in(demo, "demo_dynamodb", "Demo Data", Icon::DynamoDb)?;
    d.chain(&[demo_api, demo_lambda, demo_dynamodb])?;

    let waf_layer = d.cluster("waf_layer", "WAF Protection Layer");
    let demo_waf = d.node_in(
        waf_layer,
        "demo_waf",
        "Demo WAF\n(Comprehensive Rules)",
        Icon::Waf,
    )?;
    let main_waf = d.node_in(waf_layer, "main_waf", "Main WAF\n(Log Collection)", Icon::Waf)?;

    let log_pipeline = d.cluster("log_pipeline", "Log Collection & Storage");
    let firehose = d.node_in(
        log_pipeline,
        "firehose",
        "Kinesis\nFirehose",
        Icon::KinesisFirehose,
    )?;
    let s3_logs = d.node_in(log_pipeline, "s3_logs", "WAF Logs\n(S3)", Icon::S3)?;

    let backend = d.cluster("backend", "Analysis Backend");
    let analysis_api = d.node_in(
        backend,
        "analysis_api",
        "Analysis API\n+ API Key Auth",
        Icon::ApiGateway,
    )?;

    let lambdas = d.cluster_in(backend, "lambdas", "Lambda Functions")?;
    let log_analyzer = d.node_in(
        lambdas,
        "log_analyzer",
        "Log Analyzer\n(S3 Processing)",
        Icon::Lambda,
    )?;
    let rule_manager = d.node_in(
        lambdas,
        "rule_manager",
        "Rule Manager\n(WAF Updates)",
        Icon::Lambda,
    )?;
    let ai_assistant = d.node_in(
        lambdas,
        "ai_assistant",
        "AI Assistant\n(Bedrock)",
        Icon::Lambda,
    )?;

    let analysis_db = d.node_in(
        backend,
        "analysis_db",
        "Analysis Results\n& Rule Metadata",
        Icon::DynamoDb,
    )?;
    let bedrock = d.node_in(backend, "bedrock", "Amazon Bedrock\n(Claude-3)", Icon::Bedrock)?;

    let rule_features = d.cluster("rule_features", "Rule Management Features");
    let rule_templates = d.node_in(
        rule_features,
        "rule_templates",
        "Rule Templates\n(SQLi, XSS, Rate)",
        Icon::Lambda,
    )?;
    let custom_rules = d.node_in(
        rule_features,
        "custom_rules",
        "Custom Rules\n(ByteMatch)",
        Icon::Lambda,
    )?;
    let managed_rules = d.node_in(
        rule_features,
        "managed_rules",
        "Managed Rules\n(AWS Groups)",
        Icon::Lambda,
    )?;

    // User interactions
    d.edge(users, route53)?;
    d.edge(attackers, demo_api)?;

    // WAF protection flow: the demo API sits behind the demo WAF
    d.edge_styled(
        demo_api,
        demo_waf,
        EdgeStyle::new()
            .color(EdgeColor::Red)
            .line(LineStyle::Bold)
            .direction(ArrowDirection::Back),
    )?;

    // Logging flow
    d.edge_styled(
        demo_waf,
        firehose,
        EdgeStyle::new().label("WAF Logs").color(EdgeColor::Blue),
    )?;
    d.edge(firehose, s3_logs)?;
    d.edge_styled(
        main_waf,
        firehose,
        EdgeStyle::new().label("System Logs").color(EdgeColor::Blue),
    )?;

    // Analysis flow
    d.edge(users, cloudfront)?;
    d.edge_styled(s3_frontend, analysis_api, EdgeStyle::new().label("API Calls"))?;

    d.edge(analysis_api, log_analyzer)?;
    d.edge(log_analyzer, s3_logs)?;
    d.edge(analysis_api, rule_manager)?;
    d.edge(analysis_api, ai_assistant)?;
    d.edge(ai_assistant, bedrock)?;

    // Rule management flow
    d.fan_out(
        rule_manager,
        &[rule_templates, custom_rules, managed_rules],
        EdgeStyle::new(),
    )?;
    d.fan_in(
        &[rule_templates, custom_rules, managed_rules],
        demo_waf,
        EdgeStyle::new().label("Apply Rules").color(EdgeColor::Green),
    )?;

    d.edge(log_analyzer, analysis_db)?;
    d.edge(rule_manager, analysis_db)?;
    d.edge(ai_assistant, analysis_db)?;

    // AI-powered feedback loop
    d.edge_styled(
        ai_assistant,
        rule_manager,
        EdgeStyle::new()
            .label("Smart Recommendations")
            .color(EdgeColor::Purple)
            .line(LineStyle::Dashed),
    )?;

    d.build()
}

/// The simplified pipeline view: traffic sources through the WAF and log
/// pipeline to the analyzer, the AI service, and the dashboard.
pub fn data_flow() -> Result<Diagram, GraphError> {
    let mut d = DiagramBuilder::new(
        "WAF Log Analysis Data Flow",
        "data-flow",
        RankDirection::LeftRight,
    );

    // Traffic sources
    let legitimate = d.node("legitimate", "Legitimate\nUsers", Icon::Users)?;
    let malicious = d.node("malicious", "Malicious\nTraffic", Icon::Users)?;

    let demo_app = d.node("demo_app", "Demo\nApplication", Icon::ApiGateway)?;
    let waf = d.node("waf", "AWS WAF", Icon::Waf)?;

    // Log pipeline
    let firehose = d.node("firehose", "Kinesis\nFirehose", Icon::KinesisFirehose)?;
    let s3 = d.node("s3", "S3 Logs\n(Compressed)", Icon::S3)?;

    // Analysis engine
    let analyzer = d.node("analyzer", "Log\nAnalyzer", Icon::Lambda)?;
    let ai = d.node("ai", "AI Analysis\n(Bedrock)", Icon::Bedrock)?;

    let dashboard = d.node("dashboard", "Security\nDashboard", Icon::React)?;

    // Flow connections
    d.edge(legitimate, demo_app)?;
    d.edge(malicious, demo_app)?;

    d.edge(demo_app, waf)?;
    d.edge_styled(waf, demo_app, EdgeStyle::new().label("Allow/Block"))?;
    d.edge_styled(
        waf,
        firehose,
        EdgeStyle::new().label("Logs").color(EdgeColor::Blue),
    )?;
    d.edge(firehose, s3)?;

    d.edge_styled(s3, analyzer, EdgeStyle::new().label("Parse & Analyze"))?;
    d.edge_styled(analyzer, ai, EdgeStyle::new().label("Pattern Recognition"))?;
    d.edge_styled(ai, dashboard, EdgeStyle::new().label("Insights"))?;

    d.build()
}

/// The security view: attack vectors mapped to rule sets, the detection and
/// analysis chain, and the response/mitigation fan-out.
pub fn security_architecture() -> Result<Diagram, GraphError> {
    let mut d = DiagramBuilder::new(
        "Security Architecture & Attack Flow",
        "security-architecture",
        RankDirection::TopBottom,
    );

    let attacks = d.cluster("attacks", "Attack Vectors");
    let sql_injection = d.node_in(attacks, "sql_injection", "SQL Injection", Icon::Users)?;
    let xss_attacks = d.node_in(attacks, "xss_attacks", "XSS Attacks", Icon::Users)?;
    let rate_limit = d.node_in(attacks, "rate_limit", "Rate Limiting", Icon::Users)?;
    let bot_traffic = d.node_in(attacks, "bot_traffic", "Bot Traffic", Icon::Users)?;
    let admin_access = d.node_in(attacks, "admin_access", "Admin Access\nAttempts", Icon::Users)?;

    let rule_sets = d.cluster("rule_sets", "WAF Rule Sets");
    let common_rules = d.node_in(rule_sets, "common_rules", "Common\nRule Set", Icon::Waf)?;
    let sqli_rules = d.node_in(rule_sets, "sqli_rules", "SQLi\nRule Set", Icon::Waf)?;
    let known_bad = d.node_in(rule_sets, "known_bad", "Known Bad\nInputs", Icon::Waf)?;
    let rate_rules = d.node_in(rule_sets, "rate_rules", "Rate Based\nRules", Icon::Waf)?;
    let custom_rules = d.node_in(rule_sets, "custom_rules", "Custom\nRules", Icon::Waf)?;

    let detection = d.cluster("detection", "Detection & Analysis");
    let log_analysis = d.node_in(
        detection,
        "log_analysis",
        "Real-time\nLog Analysis",
        Icon::Lambda,
    )?;
    let pattern_detection = d.node_in(
        detection,
        "pattern_detection",
        "Pattern\nDetection",
        Icon::Lambda,
    )?;
    let ai_analysis = d.node_in(detection, "ai_analysis", "AI Threat\nAnalysis", Icon::Bedrock)?;

    let response = d.cluster("response", "Response & Mitigation");
    let auto_block = d.node_in(response, "auto_block", "Automatic\nBlocking", Icon::Waf)?;
    let rule_updates = d.node_in(response, "rule_updates", "Dynamic Rule\nUpdates", Icon::Lambda)?;
    let alerts = d.node_in(response, "alerts", "Security\nAlerts", Icon::Lambda)?;

    // Attack flow
    d.edge(sql_injection, sqli_rules)?;
    d.edge(xss_attacks, common_rules)?;
    d.edge(rate_limit, rate_rules)?;
    d.edge(bot_traffic, custom_rules)?;
    d.edge(admin_access, custom_rules)?;

    // Analysis flow
    d.fan_in(
        &[common_rules, sqli_rules, known_bad, rate_rules, custom_rules],
        log_analysis,
        EdgeStyle::new(),
    )?;
    d.chain(&[log_analysis, pattern_detection, ai_analysis])?;

    // Response flow
    d.fan_out(
        ai_analysis,
        &[auto_block, rule_updates, alerts],
        EdgeStyle::new(),
    )?;

    d.build()
}

/// The deployment view: conceptual nodes grouped into CDK stack clusters
/// with inter-stack dependencies.
pub fn deployment_architecture() -> Result<Diagram, GraphError> {
    let mut d = DiagramBuilder::new(
        "Deployment Architecture (Consolidated CDK Stacks)",
        "deployment-architecture",
        RankDirection::TopBottom,
    );

    let main_stack = d.cluster("main_stack", "WafAnalyzerMainStack (Consolidated)");
    // WAF & logging
    let waf_main = d.node_in(main_stack, "waf_main", "Main WAF\n+ Rate Limiting", Icon::Waf)?;
    let s3_logs = d.node_in(main_stack, "s3_logs", "Log Bucket\n(Lifecycle)", Icon::S3)?;
    let firehose_main = d.node_in(
        main_stack,
        "firehose_main",
        "Log Delivery\nStream",
        Icon::KinesisFirehose,
    )?;
    // API layer
    let api_gw = d.node_in(main_stack, "api_gw", "Analysis API\n+ API Key", Icon::ApiGateway)?;
    let log_analyzer = d.node_in(
        main_stack,
        "log_analyzer",
        "Log Analyzer\n(S3+DynamoDB)",
        Icon::Lambda,
    )?;
    let rule_manager = d.node_in(
        main_stack,
        "rule_manager",
        "Rule Manager\n(WAF Updates)",
        Icon::Lambda,
    )?;
    let ai_assistant = d.node_in(
        main_stack,
        "ai_assistant",
        "AI Assistant\n(Bedrock)",
        Icon::Lambda,
    )?;
    let dynamodb_main = d.node_in(
        main_stack,
        "dynamodb_main",
        "Analysis Results\n(Point-in-Time)",
        Icon::DynamoDb,
    )?;
    // Frontend
    let cloudfront_main = d.node_in(
        main_stack,
        "cloudfront_main",
        "Distribution\n(OAI)",
        Icon::CloudFront,
    )?;
    let s3_frontend = d.node_in(
        main_stack,
        "s3_frontend",
        "React Frontend\n(Auto-delete)",
        Icon::S3,
    )?;

    let demo_stack = d.cluster("demo_stack", "WafAnalyzerDemoStack");
    let demo_api = d.node_in(demo_stack, "demo_api", "Demo API", Icon::ApiGateway)?;
    let demo_website = d.node_in(
        demo_stack,
        "demo_website",
        "Demo Website\n(Attack Sim)",
        Icon::Lambda,
    )?;
    let demo_api_fn = d.node_in(
        demo_stack,
        "demo_api_fn",
        "Demo API\n(Vulnerable)",
        Icon::Lambda,
    )?;
    let demo_db = d.node_in(demo_stack, "demo_db", "Demo Data", Icon::DynamoDb)?;
    let demo_waf = d.node_in(demo_stack, "demo_waf", "Demo WAF\n(Comprehensive)", Icon::Waf)?;

    let external = d.cluster("external", "External Services");
    let bedrock_service = d.node_in(
        external,
        "bedrock_service",
        "Amazon Bedrock\n(Claude-3)",
        Icon::Bedrock,
    )?;

    // Consolidated stack internal connections
    d.chain(&[waf_main, firehose_main, s3_logs])?;
    d.chain(&[api_gw, log_analyzer, s3_logs])?;
    d.edge(api_gw, rule_manager)?;
    d.edge(rule_manager, waf_main)?;
    d.edge(api_gw, ai_assistant)?;
    d.edge(ai_assistant, bedrock_service)?;
    d.fan_in(
        &[log_analyzer, rule_manager, ai_assistant],
        dynamodb_main,
        EdgeStyle::new(),
    )?;
    d.edge(cloudfront_main, s3_frontend)?;
    d.edge_styled(
        s3_frontend,
        api_gw,
        EdgeStyle::new().label("API Calls").line(LineStyle::Dashed),
    )?;

    // Demo stack connections
    d.edge(demo_api, demo_website)?;
    d.edge(demo_api, demo_api_fn)?;
    d.edge(demo_api_fn, demo_db)?;
    d.edge_styled(demo_waf, firehose_main, EdgeStyle::new().label("Demo Logs"))?;

    d.build()
}
