mod synthetic;

mod pipeline;
