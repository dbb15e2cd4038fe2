//! Icon categories for diagram nodes.
//!
//! Every node carries an [`Icon`] naming the kind of service or actor it
//! represents. Since the renderer draws through Graphviz rather than bitmap
//! assets, each category maps to a node shape and a fill color so the four
//! diagrams stay visually categorized without external image files.

/// The service or actor category of a diagram node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// End users or traffic sources (security teams, attackers, bots).
    Users,
    /// DNS service.
    Route53,
    /// CDN distribution.
    CloudFront,
    /// Object storage bucket.
    S3,
    /// Managed API gateway.
    ApiGateway,
    /// Serverless compute function.
    Lambda,
    /// Managed NoSQL database.
    DynamoDb,
    /// Log delivery stream.
    KinesisFirehose,
    /// Web application firewall.
    Waf,
    /// Managed ML inference service.
    Bedrock,
    /// Frontend web application.
    React,
}

impl Icon {
    /// Graphviz node shape for this category.
    pub fn shape(&self) -> &'static str {
        match self {
            Icon::Users => "ellipse",
            Icon::DynamoDb => "cylinder",
            Icon::S3 => "box3d",
            Icon::Waf => "hexagon",
            Icon::Route53
            | Icon::CloudFront
            | Icon::ApiGateway
            | Icon::Lambda
            | Icon::KinesisFirehose
            | Icon::Bedrock
            | Icon::React => "box",
        }
    }

    /// Fill color for this category, following the AWS service palette.
    pub fn fill_color(&self) -> &'static str {
        match self {
            Icon::Users => "#ECECEC",
            Icon::Route53 | Icon::CloudFront => "#8C4FFF",
            Icon::S3 => "#7AA116",
            Icon::ApiGateway => "#E7157B",
            Icon::Lambda => "#ED7100",
            Icon::DynamoDb => "#C925D1",
            Icon::KinesisFirehose => "#B0084D",
            Icon::Waf => "#DD344C",
            Icon::Bedrock => "#01A88D",
            Icon::React => "#61DAFB",
        }
    }

    /// Label color readable against [`Icon::fill_color`].
    pub fn font_color(&self) -> &'static str {
        match self {
            Icon::Users | Icon::React => "#000000",
            _ => "#FFFFFF",
        }
    }
}
