//! Admin CRUD templates
//!
//! Handlebars sources for the generated resource controller and list view.
//! The view template leaves `{{headers}}` and `{{rows}}` at column zero: the
//! per-field blocks spliced in there carry their own indentation.

/// Resource controller template
///
/// Context: `model_name`, `plural`.
pub const CONTROLLER_TEMPLATE: &str = r#"import { Controller } from "canx";
import { Request, Response } from "canx/http";
import { {{model_name}} } from "@/app/models/{{model_name}}";

export class {{model_name}}Controller extends Controller {
  /**
   * Display a listing of the resource.
   */
  public async index(req: Request, res: Response) {
    const items = await {{model_name}}.all();
    return res.view("admin/{{plural}}/index", { items });
  }

  /**
   * Show the form for creating a new resource.
   */
  public async create(req: Request, res: Response) {
    return res.view("admin/{{plural}}/create");
  }

  /**
   * Store a newly created resource in storage.
   */
  public async store(req: Request, res: Response) {
    const data = req.body;
    await {{model_name}}.create(data);
    return res.redirect("/admin/{{plural}}");
  }

  /**
   * Show the form for editing the specified resource.
   */
  public async edit(req: Request, res: Response) {
    const id = req.params.id;
    const item = await {{model_name}}.find(id);
    return res.view("admin/{{plural}}/edit", { item });
  }

  /**
   * Update the specified resource in storage.
   */
  public async update(req: Request, res: Response) {
    const id = req.params.id;
    const data = req.body;
    await {{model_name}}.update(id, data);
    return res.redirect("/admin/{{plural}}");
  }

  /**
   * Remove the specified resource from storage.
   */
  public async destroy(req: Request, res: Response) {
    const id = req.params.id;
    await {{model_name}}.delete(id);
    return res.redirect("/admin/{{plural}}");
  }
}
"#;

/// List view template
///
/// Context: `model_name`, `plural`, plus the pre-serialized `headers` and
/// `rows` column blocks.
pub const VIEW_TEMPLATE: &str = r#"import React from "react";
import { Button, Card, CardHeader, CardTitle, CardContent, Table, TableHeader, TableRow, TableHead, TableBody, TableCell, Badge } from "canx-ui";
import { Layout } from "@/resources/views/layouts/admin";

interface Props {
  items: any[];
}

export default function {{model_name}}Index({ items }: Props) {
  return (
    <Layout title="{{model_name}} Management">
      <div className="space-y-6">
        <div className="flex items-center justify-between">
          <h1 className="text-3xl font-bold tracking-tight">{{model_name}}s</h1>
          <Button onClick={() => window.location.href='/admin/{{plural}}/create'}>
            Create New {{model_name}}
          </Button>
        </div>

        <Card>
          <CardHeader>
            <CardTitle>List of {{model_name}}s</CardTitle>
          </CardHeader>
          <CardContent>
            <Table>
              <TableHeader>
                <TableRow>
                  <TableHead>ID</TableHead>
{{headers}}
                  <TableHead className="text-right">Actions</TableHead>
                </TableRow>
              </TableHeader>
              <TableBody>
                {items.map((item) => (
                  <TableRow key={item.id}>
                    <TableCell className="font-medium">{item.id}</TableCell>
{{rows}}
                    <TableCell className="text-right">
                      <div className="flex justify-end gap-2">
                        <Button variant="outline" size="sm" asChild>
                           <a href={`/admin/{{plural}}/${item.id}/edit`}>Edit</a>
                        </Button>
                        <form action={`/admin/{{plural}}/${item.id}/delete`} method="POST" className="inline">
                            <Button variant="destructive" size="sm" type="submit">Delete</Button>
                        </form>
                      </div>
                    </TableCell>
                  </TableRow>
                ))}
              </TableBody>
            </Table>
          </CardContent>
        </Card>
      </div>
    </Layout>
  );
}
"#;
