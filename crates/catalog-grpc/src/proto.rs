//! Generated protobuf and gRPC code.

/// Product catalog messages and the `ProductServices` service.
pub mod catalog {
    tonic::include_proto!("catalog");
}

/// Standard gRPC health checking protocol.
pub mod health {
    tonic::include_proto!("grpc.health.v1");
}
